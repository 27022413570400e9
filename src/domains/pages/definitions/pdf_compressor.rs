//! Built-in page of the PDF compressor tool.

use super::PageDefinition;

/// Upload form posting to the compression endpoint.
///
/// Context: `title`, `action` (relative to the page), raw `level_options`,
/// and `static_export` for copies written by the static export.
pub struct PdfCompressorPage;

impl PageDefinition for PdfCompressorPage {
    const NAME: &'static str = "pdf_compressor";

    fn template() -> &'static str {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>PDF Compressor - {{title}}</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 36rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
label { display: block; margin-top: .75rem; }
input, select { width: 100%; padding: .3rem; box-sizing: border-box; }
button { margin-top: 1rem; padding: .5rem 1rem; }
fieldset { margin-top: 1rem; }
.hint { padding: .75rem 1rem; background: #fff8e1; border-radius: .25rem; }
</style>
</head>
<body>
<p><a href="../index.html">&larr; {{title}}</a></p>
<h1>PDF Compressor</h1>
{{#if static_export}}<p class="hint">Compression runs on the portal server: start it with <code>tools-portal serve</code>. A static host cannot process uploads.</p>
{{/if}}<form method="post" action="{{action}}" enctype="multipart/form-data">
<label>PDF file <input type="file" name="file" accept="application/pdf,.pdf" required></label>
<label>Compression level
<select name="compression_level">
{{{level_options}}}</select>
</label>
<fieldset>
<legend>Metadata (optional)</legend>
<label>Title <input type="text" name="title" placeholder="Defaults to the file name"></label>
<label>Author <input type="text" name="author"></label>
<label>Subject <input type="text" name="subject"></label>
<label>Created <input type="datetime-local" name="created_date"></label>
<label>Modified <input type="datetime-local" name="modified_date"></label>
</fieldset>
<button type="submit">Compress</button>
</form>
</body>
</html>
"#
    }
}
