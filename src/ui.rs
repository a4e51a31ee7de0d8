use crate::models::{MoodTheme, Preferences, Theme};

pub fn render_index(preferences: &Preferences) -> String {
    let theme = match preferences.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let mood_theme = match preferences.mood_theme {
        MoodTheme::Joy => "joy",
        MoodTheme::Peaceful => "peaceful",
        MoodTheme::Calm => "calm",
        MoodTheme::Sad => "sad",
        MoodTheme::Angry => "angry",
    };
    INDEX_HTML
        .replace("{{THEME}}", theme)
        .replace("{{MOOD_THEME}}", mood_theme)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="{{THEME}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Journify</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --panel: white;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --mood-terrible: #c63b2b;
      --mood-bad: #f08a4b;
      --mood-okay: #e8c547;
      --mood-good: #6cc17a;
      --mood-amazing: #3b82f6;
    }

    [data-theme="dark"] {
      --bg-1: #1c1f24;
      --bg-2: #2f4858;
      --ink: #f1ece4;
      --card: rgba(32, 36, 42, 0.92);
      --panel: #262a31;
    }

    body.theme-joy { --accent: #3b82f6; }
    body.theme-peaceful { --accent: #2d9b6a; }
    body.theme-calm { --accent: #ff6b4a; }
    body.theme-sad { --accent: #6b7fa8; }
    body.theme-angry { --accent: #c63b2b; }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1) 60%, var(--bg-1) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
      transition: background 0.5s ease;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: flex-start;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle, .quote-author {
      margin: 0;
      color: #8b857d;
      font-size: 1rem;
    }

    .quote {
      font-style: italic;
      margin: 6px 0 2px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat, .card {
      background: var(--panel);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    form {
      display: grid;
      gap: 12px;
    }

    textarea, select, input {
      width: 100%;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 12px;
      font: inherit;
      background: var(--panel);
      color: var(--ink);
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease;
    }

    button.secondary {
      background: var(--accent-2);
    }

    button:active {
      transform: scale(0.98);
    }

    .calendar-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar-day {
      text-align: center;
      padding: 8px 0;
      border-radius: 10px;
      font-size: 0.9rem;
    }

    .calendar-day.header {
      font-weight: 600;
      color: #8b857d;
    }

    .calendar-day.other-month {
      opacity: 0.35;
    }

    .calendar-day.today {
      outline: 2px solid var(--accent);
    }

    .mood-terrible { background: var(--mood-terrible); color: white; }
    .mood-bad { background: var(--mood-bad); color: white; }
    .mood-okay { background: var(--mood-okay); }
    .mood-good { background: var(--mood-good); color: white; }
    .mood-amazing { background: var(--mood-amazing); color: white; }

    svg {
      width: 100%;
      display: block;
    }

    svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
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

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body class="theme-{{MOOD_THEME}}">
  <main class="app">
    <header>
      <div>
        <h1>Journify</h1>
        <p class="quote" id="quote"></p>
        <p class="quote-author" id="quote-author"></p>
      </div>
      <button class="secondary" id="theme-toggle" type="button">Toggle theme</button>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="streak" class="value">0</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span id="longest" class="value">0</span>
      </div>
      <div class="stat">
        <span class="label">Total entries</span>
        <span id="total" class="value">0</span>
      </div>
    </section>

    <section class="card">
      <h2>Today's reflection</h2>
      <form id="journal-form">
        <textarea id="went-well" rows="2" placeholder="What went well?"></textarea>
        <textarea id="could-improve" rows="2" placeholder="What could be improved?"></textarea>
        <textarea id="tomorrow-goal" rows="2" placeholder="Goal for tomorrow"></textarea>
        <select id="mood">
          <option value="">How do you feel?</option>
          <option value="amazing">Amazing</option>
          <option value="good">Good</option>
          <option value="okay">Okay</option>
          <option value="bad">Bad</option>
          <option value="terrible">Terrible</option>
        </select>
        <input id="mood-note" placeholder="Mood note (optional)" />
        <input id="voice" placeholder="Voice transcript, e.g. 'mood: great'" />
        <div class="actions">
          <button type="submit">Save entry</button>
          <button class="secondary" id="voice-btn" type="button">Apply transcript</button>
          <button class="secondary" id="analyze-btn" type="button">Analyze sentiment</button>
          <button class="secondary" id="export-btn" type="button">Export week</button>
        </div>
      </form>
      <div id="sentiment"></div>
    </section>

    <section class="card">
      <div class="calendar-header">
        <button class="secondary" id="prev-month" type="button">&lsaquo;</button>
        <h2 id="month-label"></h2>
        <button class="secondary" id="next-month" type="button">&rsaquo;</button>
      </div>
      <div class="calendar-grid" id="calendar"></div>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Average mood</span>
        <span id="average-mood" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Trend</span>
        <span id="trend" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Best day</span>
        <span id="best-day" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Goals</span>
        <span id="goals" class="value">--</span>
      </div>
    </section>

    <section class="card">
      <div class="calendar-header">
        <h2>Analytics</h2>
        <select id="timeframe" style="width: auto">
          <option value="week">Last 7 days</option>
          <option value="month">Last 30 days</option>
          <option value="quarter">Last 90 days</option>
        </select>
      </div>
      <svg id="trend-chart" viewBox="0 0 600 220" role="img" aria-label="Mood trend"></svg>
      <svg id="distribution-chart" viewBox="0 0 600 140" role="img" aria-label="Mood distribution"></svg>
      <svg id="activity-chart" viewBox="0 0 600 60" role="img" aria-label="Last 30 days activity"></svg>
      <div id="phrases" class="subtitle"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const statusEl = $('status');
    const moodColors = {
      terrible: 'var(--mood-terrible)',
      bad: 'var(--mood-bad)',
      okay: 'var(--mood-okay)',
      good: 'var(--mood-good)',
      amazing: 'var(--mood-amazing)'
    };
    const capitalize = (text) => text ? text.charAt(0).toUpperCase() + text.slice(1) : '';
    const escapeText = (text) => String(text).replace(/[&<>"']/g, (c) => `&#${c.charCodeAt(0)};`);

    let viewYear = null;
    let viewMonth = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const getJson = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const postJson = (url, body) => getJson(url, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const applyPreferences = (prefs) => {
      document.documentElement.dataset.theme = prefs.theme;
      document.body.className = `theme-${prefs.moodTheme}`;
    };

    const loadQuote = async () => {
      const quote = await getJson('/api/quote');
      $('quote').textContent = `"${quote.content}"`;
      $('quote-author').textContent = `- ${quote.author}`;
    };

    const loadStats = async () => {
      const stats = await getJson('/api/stats');
      $('streak').textContent = stats.currentStreak;
      $('longest').textContent = stats.longestStreak;
      $('total').textContent = stats.totalEntries;
    };

    const loadSummary = async () => {
      const data = await getJson('/api/summary?timeframe=week');
      if (!data.summary) {
        return;
      }
      const summary = data.summary;
      $('average-mood').textContent = capitalize(summary.averageMood);
      $('trend').textContent = summary.trend;
      $('best-day').textContent = summary.bestDay;
      $('goals').textContent = `${summary.goalsAchieved}/${summary.totalEntries}`;
    };

    const loadCalendar = async () => {
      const query = viewYear ? `?year=${viewYear}&month=${viewMonth}` : '';
      const month = await getJson(`/api/calendar${query}`);
      viewYear = month.year;
      viewMonth = month.month;
      $('month-label').textContent = month.label;
      const headers = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat']
        .map((day) => `<div class="calendar-day header">${day}</div>`)
        .join('');
      const days = month.days.map((day) => {
        const classes = ['calendar-day'];
        if (!day.inMonth) classes.push('other-month');
        if (day.isToday) classes.push('today');
        if (day.mood) classes.push(`mood-${escapeText(day.mood)}`);
        const title = day.mood
          ? `Mood: ${day.mood}${day.moodNote ? ` - ${day.moodNote}` : ''}`
          : '';
        return `<div class="${classes.join(' ')}" title="${escapeText(title)}">${day.day}</div>`;
      }).join('');
      $('calendar').innerHTML = headers + days;
    };

    const renderTrend = (points) => {
      const chart = $('trend-chart');
      if (!points.length) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const width = 600;
      const height = 220;
      const padX = 44;
      const padY = 30;
      const xStep = points.length > 1 ? (width - padX * 2) / (points.length - 1) : 0;
      const x = (index) => padX + index * xStep;
      const y = (rank) => height - padY - ((rank - 1) / 4) * (height - padY * 2);
      let grid = '';
      ['Terrible', 'Bad', 'Okay', 'Good', 'Amazing'].forEach((label, index) => {
        const yPos = y(index + 1);
        grid += `<line class="chart-grid" x1="${padX}" y1="${yPos}" x2="${width - padX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${padX - 8}" y="${yPos + 4}" text-anchor="end">${label}</text>`;
      });
      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.rank).toFixed(2)}`)
        .join(' ');
      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.rank)}" r="4" />`)
        .join('');
      chart.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}`;
    };

    const renderDistribution = (counts) => {
      const chart = $('distribution-chart');
      const max = Math.max(1, ...counts.map((item) => item.count));
      chart.innerHTML = counts.map((item, index) => {
        const yPos = 10 + index * 26;
        const barWidth = (item.count / max) * 420;
        return `<text class="chart-label" x="90" y="${yPos + 13}" text-anchor="end">${capitalize(item.mood)}</text>`
          + `<rect x="100" y="${yPos}" width="${barWidth}" height="18" rx="6" fill="${moodColors[item.mood]}" />`
          + `<text class="chart-label" x="${110 + barWidth}" y="${yPos + 13}">${item.count ? `${item.percentage}%` : ''}</text>`;
      }).join('');
    };

    const renderActivity = (days) => {
      const cell = 560 / days.length;
      $('activity-chart').innerHTML = days.map((day, index) =>
        `<rect x="${20 + index * cell}" y="20" width="${cell - 2}" height="${cell - 2}" rx="3" fill="${day.hasEntry ? '#10b981' : '#e2e8f0'}"><title>${day.date}</title></rect>`
      ).join('');
    };

    const loadAnalytics = async () => {
      const data = await getJson(`/api/analytics?timeframe=${$('timeframe').value}`);
      renderTrend(data.moodTrend);
      renderDistribution(data.moodDistribution);
      renderActivity(data.activity);
      $('phrases').innerHTML = data.topPhrases.length
        ? data.topPhrases.map((item) => `"${escapeText(item.phrase)}" &times; ${item.count}`).join(' &middot; ')
        : 'No common phrases yet';
    };

    const refresh = () => Promise.all([loadStats(), loadSummary(), loadCalendar(), loadAnalytics()]);

    const readDraft = () => ({
      wentWell: $('went-well').value,
      couldImprove: $('could-improve').value,
      tomorrowGoal: $('tomorrow-goal').value,
      mood: $('mood').value || null,
      moodNote: $('mood-note').value
    });

    const writeDraft = (draft) => {
      $('went-well').value = draft.wentWell;
      $('could-improve').value = draft.couldImprove;
      $('tomorrow-goal').value = draft.tomorrowGoal;
      $('mood').value = draft.mood || '';
      $('mood-note').value = draft.moodNote;
    };

    $('journal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      setStatus('Saving...', 'info');
      postJson('/api/journal', readDraft())
        .then(() => {
          writeDraft({ wentWell: '', couldImprove: '', tomorrowGoal: '', mood: null, moodNote: '' });
          setStatus('Journal entry saved', 'ok');
          return Promise.all([refresh(), getJson('/api/preferences').then(applyPreferences)]);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    $('mood').addEventListener('change', () => {
      postJson('/api/preferences', { mood: $('mood').value })
        .then(applyPreferences)
        .catch((err) => setStatus(err.message, 'error'));
    });

    $('voice-btn').addEventListener('click', () => {
      postJson('/api/voice', { transcript: $('voice').value, draft: readDraft() })
        .then((res) => {
          writeDraft(res.draft);
          $('voice').value = '';
          if (res.moodTheme) {
            document.body.className = `theme-${res.moodTheme}`;
          }
          setStatus('Voice command processed', 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    $('analyze-btn').addEventListener('click', () => {
      const draft = readDraft();
      const text = `${draft.wentWell} ${draft.couldImprove} ${draft.tomorrowGoal}`.trim();
      postJson('/api/sentiment', { text })
        .then((report) => {
          const phrases = report.keyPhrases.map((phrase) => `<li>"${escapeText(phrase)}"</li>`).join('');
          $('sentiment').innerHTML = `
            <h2>Overall sentiment: ${capitalize(report.sentiment)}</h2>
            <p class="subtitle">Confidence ${Math.round(report.confidence * 100)}% &middot;
              ${report.positiveWords} positive / ${report.negativeWords} negative words</p>
            ${phrases ? `<ul>${phrases}</ul>` : ''}`;
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    $('export-btn').addEventListener('click', () => {
      window.location.href = '/api/export?format=pdf';
    });

    $('theme-toggle').addEventListener('click', () => {
      postJson('/api/preferences/theme/toggle', {})
        .then(applyPreferences)
        .catch((err) => setStatus(err.message, 'error'));
    });

    const shiftMonth = (direction) => {
      viewMonth += direction;
      if (viewMonth < 1) { viewMonth = 12; viewYear -= 1; }
      if (viewMonth > 12) { viewMonth = 1; viewYear += 1; }
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    };

    $('prev-month').addEventListener('click', () => shiftMonth(-1));
    $('next-month').addEventListener('click', () => shiftMonth(1));
    $('timeframe').addEventListener('change', () => {
      loadAnalytics().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
    loadQuote().catch(() => {});
  </script>
</body>
</html>
"#;
