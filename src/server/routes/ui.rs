//! Static upload page
//!
//! Two upload controls, a compare action, and a results pane. The page talks
//! to the JSON API and renders the returned markdown client-side; the
//! rendering library is an external collaborator, not part of this crate.

use axum::response::Html;

/// GET / - Serve the comparison page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Compare Document Differences</title>
<script src="https://cdn.jsdelivr.net/npm/marked/marked.min.js"></script>
<style>
  body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
  h1 { text-align: center; }
  .uploads { display: flex; gap: 2rem; }
  .slot { flex: 1; border: 1px solid #ccc; border-radius: 6px; padding: 1rem; }
  .banner { margin: 0.5rem 0; padding: 0.5rem; border-radius: 4px; display: none; }
  .banner.success { display: block; background: #e6f4ea; color: #1e4620; }
  .banner.warning { display: block; background: #fef7e0; color: #684e00; }
  .banner.error { display: block; background: #fce8e6; color: #5f1410; }
  .info { font-size: 0.9rem; color: #555; }
  #compare { margin: 1.5rem 0; padding: 0.6rem 1.4rem; font-size: 1rem; }
  #result { border-top: 1px solid #ccc; padding-top: 1rem; }
</style>
</head>
<body>
<h1>Compare Document Differences</h1>
<div class="uploads">
  <div class="slot">
    <h3>Document #1</h3>
    <input type="file" id="doc1" accept=".docx">
    <p class="info">Upload the first document you want to compare. This document will be used as the base for comparison.</p>
    <div class="banner" id="banner1"></div>
  </div>
  <div class="slot">
    <h3>Document #2</h3>
    <input type="file" id="doc2" accept=".docx">
    <p class="info">Upload the second document you want to compare. This document will be compared against Document #1.</p>
    <div class="banner" id="banner2"></div>
  </div>
</div>
<button id="compare">Compare documents</button>
<div class="banner" id="compareBanner"></div>
<div id="result">
  <h2 id="resultHeading" style="display:none">Comparison Analysis and Risk Assessment</h2>
  <div id="markdown"></div>
</div>
<script>
let sessionId = null;

async function ensureSession() {
  if (sessionId) return sessionId;
  const resp = await fetch('/api/sessions', { method: 'POST' });
  sessionId = (await resp.json()).session_id;
  return sessionId;
}

function showBanner(el, kind, text) {
  el.className = 'banner ' + kind;
  el.textContent = text;
}

async function upload(slot, input, banner) {
  const file = input.files[0];
  if (!file) return;
  const id = await ensureSession();
  const form = new FormData();
  form.append('slot', slot);
  form.append('file', file);
  const resp = await fetch(`/api/sessions/${id}/documents`, { method: 'POST', body: form });
  const body = await resp.json();
  if (body.status === 'uploaded') {
    const extra = (body.warnings || []).join(' ');
    showBanner(banner, extra ? 'warning' : 'success', body.message + (extra ? ' ' + extra : ''));
  } else {
    showBanner(banner, 'error', body.message || body.error);
  }
}

document.getElementById('doc1').addEventListener('change', e =>
  upload('1', e.target, document.getElementById('banner1')));
document.getElementById('doc2').addEventListener('change', e =>
  upload('2', e.target, document.getElementById('banner2')));

document.getElementById('compare').addEventListener('click', async () => {
  const banner = document.getElementById('compareBanner');
  const heading = document.getElementById('resultHeading');
  const pane = document.getElementById('markdown');
  heading.style.display = 'none';
  pane.innerHTML = '';
  if (!sessionId) {
    showBanner(banner, 'warning', 'Please upload both documents to see the comparison.');
    return;
  }
  showBanner(banner, 'warning', 'Analyzing documents...');
  const resp = await fetch(`/api/sessions/${sessionId}/compare`, { method: 'POST' });
  const body = await resp.json();
  if (body.status === 'ready') {
    banner.className = 'banner';
    heading.style.display = 'block';
    pane.innerHTML = marked.parse(body.markdown);
  } else if (body.status === 'waiting') {
    showBanner(banner, 'warning', body.message);
  } else {
    showBanner(banner, 'error', body.error);
  }
});
</script>
</body>
</html>
"#;
