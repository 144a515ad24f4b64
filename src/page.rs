//! The single form page. Event wiring is plain `fetch` against the JSON routes.

use crate::range::NO_SELECTION;
use crate::structs::Symbol;

pub const DEFAULT_CAPITAL: &str = "10000";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Stock Trading Bot</title>
<style>
  body { font-family: sans-serif; margin: 2rem; }
  .row { display: flex; gap: 2rem; }
  .col { flex: 1; display: flex; flex-direction: column; gap: 0.5rem; }
  label { font-weight: bold; }
  #chart svg { max-width: 100%; height: auto; }
</style>
</head>
<body>
<h1>📈 Stock Trading Bot</h1>
<p>Interactive stock visualization demo</p>
<form id="predict" class="row">
  <div class="col">
    <label for="symbol">Stock Symbol</label>
    <select id="symbol" name="symbol">
      <option value="" selected></option>
{{OPTIONS}}    </select>
    <label for="date-range">Available Date Range</label>
    <input id="date-range" type="text" value="{{NO_SELECTION}}" readonly>
    <label for="capital">Initial Capital ($)</label>
    <input id="capital" name="capital" type="number" step="any" value="{{CAPITAL}}">
    <label for="start_date">Start Date (YYYY-MM-DD)</label>
    <input id="start_date" name="start_date" type="text">
    <label for="end_date">End Date (YYYY-MM-DD)</label>
    <input id="end_date" name="end_date" type="text">
    <button type="submit">Predict</button>
  </div>
  <div class="col">
    <label for="results">Results</label>
    <textarea id="results" rows="4" readonly></textarea>
    <label>Stock Price Chart</label>
    <div id="chart"></div>
  </div>
</form>
<script>
const form = document.getElementById("predict");
const range = document.getElementById("date-range");
const results = document.getElementById("results");
const chart = document.getElementById("chart");

document.getElementById("symbol").addEventListener("change", async (e) => {
  const res = await fetch("/range?symbol=" + encodeURIComponent(e.target.value));
  range.value = res.ok ? (await res.json()).text : await res.text();
});

form.addEventListener("submit", async (e) => {
  e.preventDefault();
  const res = await fetch("/predict", {
    method: "POST",
    body: new URLSearchParams(new FormData(form)),
  });
  if (!res.ok) {
    results.value = await res.text();
    chart.innerHTML = "";
    return;
  }
  const body = await res.json();
  results.value = body.summary;
  chart.innerHTML = body.chart || "";
});
</script>
</body>
</html>
"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(symbols: &[Symbol]) -> String {
    let options: String = symbols
        .iter()
        .map(|s| {
            let s = escape_html(s.as_str());
            format!("      <option value=\"{s}\">{s}</option>\n")
        })
        .collect();
    TEMPLATE
        .replace("{{OPTIONS}}", &options)
        .replace("{{NO_SELECTION}}", NO_SELECTION)
        .replace("{{CAPITAL}}", DEFAULT_CAPITAL)
}
