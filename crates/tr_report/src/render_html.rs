//! crates/tr_report/src/render_html.rs
//! HTML renderer: one embedded minijinja template, asset-free, autoescaped
//! (the template name ends in `.html`, which switches minijinja's HTML
//! escaping on). Output is a self-contained document.

use minijinja::Environment;

use crate::{ReportError, ReportModel};

static TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
  body { font-family: sans-serif; margin: 2em; }
  h1 { font-size: 2.0em; }
  p { font-size: 0.9em; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #ccc; padding: 0.3em 0.6em; text-align: left; }
  th { background: #eee; }
</style>
</head>
<body>
<h1>{{ title }}</h1>
<div class="info">
  {% if attribute == "*" -%}
  <p>Users ranked by the entities they first edited (any attribute)</p>
  {%- else -%}
  <p>Users ranked by the entities they first marked with the attribute "{{ attribute }}"</p>
  {%- endif %}
  <p>File parsed: {{ source_path }}</p>
  <p>File timestamp: {{ source_modified }}</p>
  <p>Score = points*{{ weights.point }} + paths*{{ weights.path }} + relations*{{ weights.relation }}</p>
  <p>Minimum score: {{ min_score }}</p>
</div>
<table>
  <thead>
    <tr>{% for c in columns %}<th>{{ c }}</th>{% endfor %}</tr>
  </thead>
  <tbody>
  {% for r in rows %}
    <tr><td>{{ r.rank }}</td><td>{{ r.user }}</td><td>{{ r.points }}</td><td>{{ r.paths }}</td><td>{{ r.relations }}</td><td>{{ r.score }}</td><td>{{ r.total }}</td></tr>
  {% endfor %}
  </tbody>
</table>
<p>Versions seen: {{ totals.point_versions }} points, {{ totals.path_versions }} paths, {{ totals.relation_versions }} relations</p>
</body>
</html>
"#;

/// Render the model into a complete HTML document.
pub fn render_html(model: &ReportModel) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template("leaderboard.html", TEMPLATE)
        .map_err(|_| ReportError::Template("add_template"))?;
    let tmpl = env
        .get_template("leaderboard.html")
        .map_err(|_| ReportError::Template("get_template"))?;
    tmpl.render(minijinja::Value::from_serialize(model))
        .map_err(|_| ReportError::Template("render"))
}
