use crate::models::FollowUpStatus;

pub fn render_index(date: &str, days_clean: i64, today_status: Option<FollowUpStatus>) -> String {
    let status_label = match today_status {
        Some(FollowUpStatus::Success) => "Clean day",
        Some(FollowUpStatus::SlipUp) => "Slip-up",
        Some(FollowUpStatus::Relapse) => "Relapse",
        Some(FollowUpStatus::Absent) => "Absent",
        None => "Not logged yet",
    };

    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{DAYS}}", &days_clean.to_string())
        .replace("{{TODAY_STATUS}}", status_label)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Recovery Tracker</title>
  <style>
    :root {
      --bg: #0c1f2e;
      --panel: #12304a;
      --line: #1f4a6b;
      --ink: #e8f1f8;
      --muted: #8fb3cc;
      --good: #2dd4a7;
      --warn: #f0b42f;
      --bad: #ef5d60;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(170deg, var(--bg), #081521 70%);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: flex;
      justify-content: center;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(520px, 100%);
      display: grid;
      gap: 18px;
    }

    .card {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 20px;
    }

    h1 { margin: 0 0 4px; font-size: 1.4rem; }
    .date { color: var(--muted); font-size: 0.9rem; }

    .counter {
      text-align: center;
      padding: 28px 20px;
    }
    .counter .days { font-size: 3.4rem; font-weight: 700; }
    .counter .label { color: var(--muted); }

    .status-row { display: flex; gap: 10px; margin-top: 14px; }
    .status-row button {
      flex: 1;
      border: none;
      border-radius: 10px;
      padding: 12px 0;
      font-size: 0.95rem;
      font-weight: 600;
      color: #06121c;
      cursor: pointer;
    }
    .btn-success { background: var(--good); }
    .btn-slip { background: var(--warn); }
    .btn-relapse { background: var(--bad); }

    .habit {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 0;
      border-bottom: 1px solid var(--line);
    }
    .habit:last-child { border-bottom: none; }
    .habit .streak { color: var(--good); font-weight: 600; }
    .muted { color: var(--muted); }

    #message { min-height: 1.2em; font-size: 0.9rem; color: var(--muted); }
  </style>
</head>
<body>
  <div class="app">
    <header class="card">
      <h1>Recovery Tracker</h1>
      <div class="date">{{DATE}}</div>
    </header>

    <section class="card counter">
      <div class="days" id="days-clean">{{DAYS}}</div>
      <div class="label">days clean</div>
    </section>

    <section class="card">
      <div>Today: <strong id="today-status">{{TODAY_STATUS}}</strong></div>
      <div class="status-row">
        <button class="btn-success" data-status="success">Clean day</button>
        <button class="btn-slip" data-status="slip_up">Slip-up</button>
        <button class="btn-relapse" data-status="relapse">Relapse</button>
      </div>
      <div id="message"></div>
    </section>

    <section class="card">
      <h2 style="margin-top:0;font-size:1.05rem;">Habits</h2>
      <div id="habit-list" class="muted">Loading…</div>
    </section>
  </div>

  <script>
    const message = document.getElementById('message');

    async function refreshCounter() {
      const resp = await fetch('/api/counter');
      if (!resp.ok) throw new Error('failed to load counter');
      const counter = await resp.json();
      document.getElementById('days-clean').textContent = counter.days_clean;
    }

    async function refreshHabits() {
      const resp = await fetch('/api/habits');
      if (!resp.ok) throw new Error('failed to load habits');
      const habits = await resp.json();
      const list = document.getElementById('habit-list');
      if (habits.length === 0) {
        list.textContent = 'No habits yet.';
        return;
      }
      list.classList.remove('muted');
      list.replaceChildren(...habits.map((habit) => {
        const row = document.createElement('div');
        row.className = 'habit';
        const name = document.createElement('span');
        name.textContent = habit.icon ? `${habit.icon} ${habit.name}` : habit.name;
        const streak = document.createElement('span');
        streak.className = 'streak';
        streak.textContent = `🔥 ${habit.current_streak} (best ${habit.best_streak})`;
        row.append(name, streak);
        return row;
      }));
    }

    async function logStatus(status) {
      const resp = await fetch('/api/followup/log', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ status }),
      });
      if (!resp.ok) throw new Error(await resp.text());
      const logged = await resp.json();
      document.getElementById('today-status').textContent = logged.status;
      await refreshCounter();
      message.textContent = 'Saved.';
    }

    document.querySelectorAll('.status-row button').forEach((button) => {
      button.addEventListener('click', () => {
        logStatus(button.dataset.status).catch((err) => {
          message.textContent = err.message;
        });
      });
    });

    refreshHabits().catch((err) => { message.textContent = err.message; });
  </script>
</body>
</html>
"#;
