//! The fixed HTML page the rendered fragment is placed into.

const HEAD_OPEN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>"#;

const HEAD_CLOSE: &str = r#"</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css">
    <style>
        body {
            font-family: 'Inter', sans-serif;
            max-width: 850px;
            margin: 40px auto;
            padding: 30px;
            line-height: 1.7;
            color: #333;
            background-color: #ffffff;
            border-radius: 10px;
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
        }

        @media (max-width: 600px) {
            body {
                margin: 20px;
                padding: 15px;
            }
        }

        h1, h2, h3 {
            color: #1f2937;
            border-bottom: 2px solid #e5e7eb;
            padding-bottom: 10px;
            margin-top: 35px;
            font-weight: 700;
        }
        h1 { font-size: 2.5rem; }
        h2 { font-size: 2rem; }
        h3 { font-size: 1.5rem; }

        pre {
            background-color: #f4f6f8;
            border: 1px solid #e5e7eb;
            border-radius: 6px;
            overflow-x: auto;
            padding: 16px;
            margin: 20px 0;
        }
        code {
            font-family: 'Consolas', 'Courier New', monospace;
            font-size: 0.95rem;
            color: #374151;
        }
        pre code.hljs {
            padding: 0;
            background: transparent;
        }
        p > code, li > code, td > code {
            background-color: #f0f0f5;
            padding: 3px 6px;
            border-radius: 3px;
        }

        a {
            color: #2563eb;
            text-decoration: none;
            transition: color 0.2s;
        }
        a:hover {
            color: #1d4ed8;
            text-decoration: underline;
        }

        ul, ol {
            margin: 15px 0 15px 25px;
            padding-left: 0;
        }
        li {
            margin-bottom: 8px;
        }

        table {
            border-collapse: collapse;
            width: 100%;
            margin: 20px 0;
        }
        th, td {
            border: 1px solid #e5e7eb;
            padding: 8px 12px;
            text-align: left;
        }
        thead th {
            background-color: #f3f4f6;
            font-weight: 600;
        }
        tbody tr:nth-child(even) {
            background-color: #f9fafb;
        }
    </style>
</head>
<body>
    <div id="content">
"#;

const BODY_CLOSE: &str = r#"
    </div>
</body>
</html>
"#;

/// Build the complete page.
///
/// `title` goes into `<title>` as-is; callers pass text that is already
/// safe to embed.
pub fn compose(title: &str, fragment: &str) -> String {
    let mut page = String::with_capacity(
        HEAD_OPEN.len() + title.len() + HEAD_CLOSE.len() + fragment.len() + BODY_CLOSE.len(),
    );
    page.push_str(HEAD_OPEN);
    page.push_str(title);
    page.push_str(HEAD_CLOSE);
    page.push_str(fragment);
    page.push_str(BODY_CLOSE);
    page
}
