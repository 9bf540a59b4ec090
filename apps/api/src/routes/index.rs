//! The single-page UI, embedded so the binary is the whole deployment.
//!
//! Kept deliberately framework-free on the client side: one HTML document,
//! a little CSS, and a fetch() call per button click against the JSON API.

use axum::response::Html;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Resume Analyzer</title>
<style>
  :root { color-scheme: light dark; }
  body {
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem 1.5rem;
    line-height: 1.5;
  }
  h1 { margin-bottom: 0.25rem; }
  .subtitle { color: #888; margin-top: 0; }
  .columns { display: flex; gap: 2rem; flex-wrap: wrap; margin-top: 1.5rem; }
  .col { flex: 1 1 320px; }
  label { display: block; font-weight: 600; margin-bottom: 0.5rem; }
  textarea {
    width: 100%;
    min-height: 180px;
    padding: 0.6rem;
    font: inherit;
    box-sizing: border-box;
  }
  input[type="file"] { margin-bottom: 0.75rem; }
  .status { padding: 0.6rem 0.8rem; border-radius: 6px; margin: 0.5rem 0; }
  .status.ok { background: #e7f6e7; color: #1a6b1a; }
  .status.warn { background: #fdf3dc; color: #8a6d1a; }
  .status.err { background: #fde8e8; color: #a12626; }
  @media (prefers-color-scheme: dark) {
    .status.ok { background: #16381a; color: #8fd694; }
    .status.warn { background: #3d3216; color: #e8cd7a; }
    .status.err { background: #3f1a1a; color: #f2a0a0; }
  }
  button {
    font: inherit;
    padding: 0.6rem 1.4rem;
    border-radius: 6px;
    border: none;
    background: #2563eb;
    color: white;
    cursor: pointer;
    margin-top: 1rem;
  }
  button:disabled { opacity: 0.5; cursor: wait; }
  #result {
    white-space: pre-wrap;
    margin-top: 1.5rem;
    padding: 1rem;
    border: 1px solid #8884;
    border-radius: 6px;
    display: none;
  }
  footer {
    margin-top: 3rem;
    border-top: 1px solid #8884;
    padding-top: 1rem;
    text-align: center;
    color: #888;
    font-size: 0.85rem;
  }
</style>
</head>
<body>
<h1>🤖 AI Resume Analyzer</h1>
<p class="subtitle">Upload your resume and compare it with job descriptions using <b>Gemini</b>.</p>

<div class="columns">
  <div class="col">
    <label for="resume">Upload your resume (PDF)</label>
    <input type="file" id="resume" accept="application/pdf">
    <div id="upload-status" class="status warn">⚠️ Please upload a resume in PDF format before analyzing.</div>
  </div>
  <div class="col">
    <label for="jd">Enter Job Description:</label>
    <textarea id="jd" placeholder="Paste the job description here..."></textarea>
  </div>
</div>

<button id="analyze">🔍 Analyze Resume</button>
<div id="analyze-status"></div>
<div id="result"></div>

<footer>Powered by Axum &amp; Gemini</footer>

<script>
const fileInput = document.getElementById('resume');
const uploadStatus = document.getElementById('upload-status');
const analyzeBtn = document.getElementById('analyze');
const analyzeStatus = document.getElementById('analyze-status');
const result = document.getElementById('result');

function setStatus(el, cls, text) {
  el.className = 'status ' + cls;
  el.textContent = text;
}

fileInput.addEventListener('change', async () => {
  const file = fileInput.files[0];
  if (!file) {
    setStatus(uploadStatus, 'warn', '⚠️ Please upload a resume in PDF format before analyzing.');
    return;
  }
  setStatus(uploadStatus, 'ok', '✅ Resume uploaded successfully!');

  // Preview extraction so problems surface before Analyze is clicked.
  const form = new FormData();
  form.append('resume', file);
  try {
    const res = await fetch('/api/v1/extract', { method: 'POST', body: form });
    const body = await res.json();
    if (res.ok) {
      setStatus(uploadStatus, 'ok',
        `✅ Resume uploaded — extracted ${body.chars} characters (${body.method}).`);
    } else {
      setStatus(uploadStatus, 'err', '❌ ' + body.error.message);
    }
  } catch (e) {
    setStatus(uploadStatus, 'err', '❌ Extraction preview failed: ' + e);
  }
});

analyzeBtn.addEventListener('click', async () => {
  const file = fileInput.files[0];
  if (!file) {
    setStatus(uploadStatus, 'warn', '⚠️ Please upload a resume in PDF format before analyzing.');
    return;
  }

  const form = new FormData();
  form.append('resume', file);
  form.append('job_description', document.getElementById('jd').value);

  analyzeBtn.disabled = true;
  result.style.display = 'none';
  setStatus(analyzeStatus, 'warn', 'Analyzing your resume... Please wait.');

  try {
    const res = await fetch('/api/v1/analyze', { method: 'POST', body: form });
    const body = await res.json();
    if (res.ok) {
      setStatus(analyzeStatus, 'ok', '✅ Analysis complete!');
      result.textContent = body.analysis;
      result.style.display = 'block';
    } else {
      setStatus(analyzeStatus, 'err', '❌ Analysis failed: ' + body.error.message);
    }
  } catch (e) {
    setStatus(analyzeStatus, 'err', '❌ Analysis failed: ' + e);
  } finally {
    analyzeBtn.disabled = false;
  }
});
</script>
</body>
</html>
"#;
