//! Full page handlers
//!
//! Pages compose components into complete HTML responses using the shared
//! base layout with HTMX and Tailwind CSS.

pub mod search;

use axum::response::Html;

// Re-export page handlers
pub use search::search_page;

/// Wraps `content` in the base document.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    400: '#fbbf24',
                                    500: '#f59e0b',
                                    600: '#d97706'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <style>
                #loading {{ display: none; }}
                #loading.htmx-request {{ display: block; }}
                #loading.htmx-request + #results {{ display: none; }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            <main class="max-w-7xl mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#
    );

    Html(html)
}
