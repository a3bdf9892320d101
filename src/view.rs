use crate::handlers::list::FileView;

/// Render the listing page. The view receives only the file records; all
/// interaction (delete form, upload form, download links) lives in the
/// embedded template.
pub fn render_index(files: &[FileView]) -> String {
    let mut rows = String::new();
    if files.is_empty() {
        rows.push_str("                <li>No files found.</li>\n");
    } else {
        for file in files {
            let name = escape_html(&file.name);
            rows.push_str(&format!(
                concat!(
                    "                <li class=\"file-item\">\n",
                    "                    <input type=\"checkbox\" name=\"files\" value=\"{name}\">\n",
                    "                    <a href=\"/download/{name}\" class=\"download-link\" hx-boost=\"false\" onclick=\"showDownloadStarted('{name}')\">{name}</a>\n",
                    "                    <span style=\"padding-left: 1em; color: #555; white-space: nowrap;\">{size} &nbsp; {modified}</span>\n",
                    "                </li>\n",
                ),
                name = name,
                size = file.size_mb,
                modified = file.modified,
            ));
        }
    }
    INDEX_HTML.replace("{{rows}}", &rows)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>File Server</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <style>
        body { font-family: sans-serif; }
        .container { max-width: 800px; margin: auto; padding: 20px; }
        .file-list { list-style-type: none; padding: 0; }
        .file-item { display: flex; align-items: center; margin-bottom: 5px; }
        .file-item input { margin-right: 10px; }
        .file-item a { flex-grow: 1; }
        .actions { margin-top: 20px; }
        .upload-form { margin-top: 20px; border-top: 1px solid #ccc; padding-top: 20px; }
        progress { width: 100%; }
        .download-link { color: #0066cc; text-decoration: underline; cursor: pointer; }
        .custom-file-upload {
            display: inline-block;
            padding: 6px 12px;
            cursor: pointer;
            background-color: #f8f8f8;
            border: 1px solid #ccc;
            border-radius: 4px;
        }
        .file-input {
            display: none;
        }
        .download-notification {
            position: fixed;
            bottom: 20px;
            right: 20px;
            background-color: #4CAF50;
            color: white;
            padding: 15px;
            border-radius: 5px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.2);
            display: none;
            z-index: 1000;
            animation: fadeOut 3s forwards;
            animation-delay: 2s;
        }
        @keyframes fadeOut {
            from { opacity: 1; }
            to { opacity: 0; }
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Files</h1>
        <form>
            <ul class="file-list">
{{rows}}            </ul>
            <div class="actions">
                <button type="button" hx-post="/delete" hx-target="body" hx-include="[name='files']:checked" hx-confirm="Are you sure you want to delete the selected files?">Delete Selected</button>
            </div>
        </form>

        <div class="upload-form">
            <h2>Upload Files</h2>
            <form hx-encoding="multipart/form-data" hx-post="/upload" hx-target="body">
                <label class="custom-file-upload">
                    <input type="file" name="files" multiple
                           class="file-input"
                           hx-trigger="change"
                           hx-encoding="multipart/form-data"
                           hx-post="/upload"
                           hx-target="body">
                    Upload files
                </label>
                <progress id="progress" value="0" max="100" style="display: none;"></progress>
            </form>
        </div>
    </div>

    <div id="download-notification" class="download-notification"></div>

    <script>
      document.body.addEventListener('htmx:xhr:progress', function(evt) {
        var progress = document.getElementById('progress');
        progress.style.display = 'block';
        progress.value = evt.detail.loaded / evt.detail.total * 100;
      });
      document.body.addEventListener('htmx:afterRequest', function(evt) {
        var progress = document.getElementById('progress');
        if (progress) {
            setTimeout(function() {
                progress.style.display = 'none';
                progress.value = 0;
            }, 1000);
        }
      });

      function showDownloadStarted(filename) {
        var notification = document.getElementById('download-notification');
        notification.textContent = 'Downloading: ' + filename;
        notification.style.display = 'block';
        notification.style.opacity = '1';
        notification.style.animation = 'none';

        setTimeout(function() {
          notification.style.animation = 'fadeOut 3s forwards';
        }, 100);

        setTimeout(function() {
          notification.style.display = 'none';
        }, 5000);
      }
    </script>
</body>
</html>
"#;
