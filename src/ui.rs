const DEFAULT_SPECIES: &str = "American beech";

pub fn render_index(species: &[String]) -> String {
    INDEX_HTML.replace("{{SPECIES_OPTIONS}}", &species_options(species))
}

fn species_options(species: &[String]) -> String {
    species
        .iter()
        .map(|name| {
            let escaped = escape_html(name);
            if name == DEFAULT_SPECIES {
                format!("<option value=\"{escaped}\" selected>{escaped}</option>")
            } else {
                format!("<option value=\"{escaped}\">{escaped}</option>")
            }
        })
        .collect()
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>NYC Street Tree Health</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3ea;
      --bg-2: #cfe3c4;
      --ink: #24302a;
      --accent: #2d7a4b;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
      --good: #2d7a4b;
      --fair: #d9a441;
      --poor: #c63b2b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4eedd 60%, #f2f6ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 30px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5a655c;
      font-size: 1rem;
    }

    section h2 {
      margin: 0 0 4px;
      font-size: 1.25rem;
    }

    .question {
      margin: 0 0 14px;
      color: #5a655c;
      font-size: 0.95rem;
    }

    .selectors {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      margin-bottom: 16px;
    }

    .selectors label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #76806f;
    }

    select {
      appearance: none;
      min-width: 240px;
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
      font-family: inherit;
      font-size: 0.95rem;
      color: var(--ink);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      overflow-x: auto;
    }

    .chart-card svg {
      width: 100%;
      display: block;
    }

    .chart-card svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      margin-top: 10px;
      font-size: 0.85rem;
      color: #5a655c;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 6px;
      background: var(--dot, #888);
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #76806f;
      font-size: 11px;
    }

    .axis-title {
      fill: #4a554c;
      font-size: 12px;
      font-weight: 600;
    }

    .status {
      font-size: 0.95rem;
      color: #5a655c;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      select {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>NYC Street Tree Health</h1>
      <p class="subtitle">2015 Street Tree Census, queried live from NYC Open Data.</p>
    </header>

    <section>
      <h2>Health by borough</h2>
      <p class="question">What proportion of trees are in good, fair, or poor health for a given species?</p>
      <div class="selectors">
        <label>Species
          <select id="species-1">{{SPECIES_OPTIONS}}</select>
        </label>
      </div>
      <div class="chart-card">
        <svg id="health-chart" viewBox="0 0 600 320" role="img" aria-label="Tree health by borough"></svg>
      </div>
      <div class="legend" id="health-legend"></div>
    </section>

    <section>
      <h2>Steward impact</h2>
      <p class="question">Are stewards having an impact on the health of trees?</p>
      <div class="selectors">
        <label>Borough
          <select id="boro">
            <option value="Bronx" selected>Bronx</option>
            <option value="Brooklyn">Brooklyn</option>
            <option value="Manhattan">Manhattan</option>
            <option value="Staten Island">Staten Island</option>
            <option value="Queens">Queens</option>
          </select>
        </label>
        <label>Species
          <select id="species-2">{{SPECIES_OPTIONS}}</select>
        </label>
      </div>
      <div class="chart-card">
        <svg id="steward-chart" viewBox="0 0 900 500" role="img" aria-label="Health share by steward activity"></svg>
      </div>
      <div class="legend" id="steward-legend"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const species1El = document.getElementById('species-1');
    const species2El = document.getElementById('species-2');
    const boroEl = document.getElementById('boro');
    const healthChartEl = document.getElementById('health-chart');
    const stewardChartEl = document.getElementById('steward-chart');
    const healthLegendEl = document.getElementById('health-legend');
    const stewardLegendEl = document.getElementById('steward-legend');
    const statusEl = document.getElementById('status');

    const SERIES_COLORS = {
      Good: '#2d7a4b',
      Fair: '#d9a441',
      Poor: '#c63b2b'
    };
    const FALLBACK_COLORS = ['#2f4858', '#7d5ba6', '#4a8fe7', '#888'];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const seriesColor = (name, index) =>
      SERIES_COLORS[name] || FALLBACK_COLORS[index % FALLBACK_COLORS.length];

    const renderLegend = (legendEl, spec) => {
      legendEl.innerHTML = spec.series
        .map((series, index) =>
          `<span style="--dot: ${seriesColor(series.name, index)}">${series.name}</span>`)
        .join('');
    };

    const renderGroupedBars = (svg, spec) => {
      const width = spec.layout ? spec.layout.width : 600;
      const height = spec.layout ? spec.layout.height : 320;
      svg.setAttribute('viewBox', `0 0 ${width} ${height}`);
      if (spec.layout) {
        svg.style.maxWidth = `${spec.layout.width}px`;
      }

      const categories = [];
      spec.series.forEach((series) => {
        series.bars.forEach((bar) => {
          if (!categories.includes(bar.category)) {
            categories.push(bar.category);
          }
        });
      });

      if (!categories.length) {
        svg.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data for this selection</text>';
        return;
      }

      const paddingLeft = 64;
      const paddingRight = 20;
      const paddingBottom = 58;
      const top = 20;
      const plotWidth = width - paddingLeft - paddingRight;
      const plotHeight = height - top - paddingBottom;

      let max = 0;
      spec.series.forEach((series) => {
        series.bars.forEach((bar) => {
          max = Math.max(max, bar.value);
        });
      });
      if (max === 0) {
        max = 1;
      }

      const band = plotWidth / categories.length;
      const barWidth = (band * 0.8) / spec.series.length;
      const x = (categoryIndex, seriesIndex) =>
        paddingLeft + categoryIndex * band + band * 0.1 + seriesIndex * barWidth;
      const y = (value) => top + plotHeight - (value / max) * plotHeight;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingLeft}" y1="${yPos}" x2="${width - paddingRight}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingLeft - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value * 10) / 10}</text>`;
      }

      let bars = '';
      spec.series.forEach((series, seriesIndex) => {
        const color = seriesColor(series.name, seriesIndex);
        series.bars.forEach((bar) => {
          const categoryIndex = categories.indexOf(bar.category);
          const barX = x(categoryIndex, seriesIndex);
          const barY = y(bar.value);
          const barHeight = top + plotHeight - barY;
          bars += `<rect x="${barX.toFixed(2)}" y="${barY.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${barHeight.toFixed(2)}" rx="3" fill="${color}"><title>${series.name}: ${Math.round(bar.value * 100) / 100}</title></rect>`;
        });
      });

      const xLabels = categories
        .map((category, index) =>
          `<text class="chart-label" x="${paddingLeft + index * band + band / 2}" y="${height - paddingBottom + 18}" text-anchor="middle">${category}</text>`)
        .join('');

      const xTitle = `<text class="axis-title" x="${paddingLeft + plotWidth / 2}" y="${height - 10}" text-anchor="middle">${spec.x_label}</text>`;
      const yTitle = `<text class="axis-title" transform="rotate(-90 14 ${top + plotHeight / 2})" x="14" y="${top + plotHeight / 2}" text-anchor="middle">${spec.y_label}</text>`;

      svg.innerHTML = `${grid}${bars}${xLabels}${xTitle}${yTitle}`;
    };

    const fetchSpec = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        const message = await res.text();
        throw new Error(message || 'Chart request failed');
      }
      return res.json();
    };

    const loadHealthChart = async () => {
      const species = encodeURIComponent(species1El.value);
      const spec = await fetchSpec(`/api/chart/health?species=${species}`);
      renderGroupedBars(healthChartEl, spec);
      renderLegend(healthLegendEl, spec);
    };

    const loadStewardChart = async () => {
      const borough = encodeURIComponent(boroEl.value);
      const species = encodeURIComponent(species2El.value);
      const spec = await fetchSpec(`/api/chart/steward?borough=${borough}&species=${species}`);
      renderGroupedBars(stewardChartEl, spec);
      renderLegend(stewardLegendEl, spec);
    };

    const refresh = (loader) => {
      setStatus('Loading…', 'info');
      loader()
        .then(() => setStatus('', ''))
        .catch((err) => setStatus(err.message, 'error'));
    };

    species1El.addEventListener('change', () => refresh(loadHealthChart));
    boroEl.addEventListener('change', () => refresh(loadStewardChart));
    species2El.addEventListener('change', () => refresh(loadStewardChart));

    refresh(() => Promise.all([loadHealthChart(), loadStewardChart()]));
  </script>
</body>
</html>
"#;
