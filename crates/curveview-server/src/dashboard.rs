//! The dashboard page.
//!
//! A single static page: one date slider and two Plotly panels. The slider
//! slides over index positions of the table's date array, so it can only
//! ever emit dates that are actually present in the index. Each slider move
//! re-fetches the snapshot figure and re-renders that panel.

/// Dashboard HTML, served at `/`.
pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Yield Curve Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 0; padding: 1rem 2rem; }
  h1 { font-size: 1.4rem; }
  .controls { margin: 1rem 0; }
  .controls input[type=range] { width: 60%; vertical-align: middle; }
  .controls .date-label { font-weight: bold; margin-left: 1rem; }
  .panel { width: 100%; height: 480px; margin-bottom: 1.5rem; }
  button { margin-right: 0.5rem; }
</style>
</head>
<body>
<h1>Yield Curve Visualization</h1>

<div class="controls">
  <label for="date-slider">Select Date</label>
  <input type="range" id="date-slider" min="0" max="0" value="0" step="1">
  <span class="date-label" id="date-label"></span>
</div>

<div id="snapshot" class="panel"></div>

<div class="controls">
  <button id="play">Play</button>
  <button id="pause">Pause</button>
</div>
<div id="animation" class="panel"></div>

<script>
(async function () {
  const slider = document.getElementById('date-slider');
  const label = document.getElementById('date-label');

  const { dates, default: latest } = await (await fetch('/api/v1/dates')).json();
  slider.max = dates.length - 1;
  slider.value = dates.indexOf(latest);

  async function renderSnapshot(date) {
    label.textContent = date;
    const fig = await (await fetch('/api/v1/curve/' + date)).json();
    await Plotly.react('snapshot', fig.data, fig.layout, { responsive: true });
  }

  slider.addEventListener('input', () => renderSnapshot(dates[slider.value]));
  await renderSnapshot(dates[slider.value]);

  const anim = await (await fetch('/api/v1/animation')).json();
  await Plotly.newPlot('animation', anim.data, anim.layout, { responsive: true });
  await Plotly.addFrames('animation', anim.frames);

  document.getElementById('play').addEventListener('click', () => {
    Plotly.animate('animation', null, {
      frame: { duration: 60, redraw: false },
      transition: { duration: 0 },
      mode: 'immediate',
    });
  });
  document.getElementById('pause').addEventListener('click', () => {
    Plotly.animate('animation', [], { mode: 'immediate' });
  });
})();
</script>
</body>
</html>
"#;
