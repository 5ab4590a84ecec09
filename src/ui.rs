use crate::selection::Selection;

pub fn render_index(selection: &Selection) -> String {
    let date = selection
        .date()
        .map(|d| d.to_string())
        .unwrap_or_default();
    let share_disabled = if selection.is_shareable() { "" } else { "disabled" };
    INDEX_HTML
        .replace("{{DATE}}", &date)
        .replace("{{SHARE_DISABLED}}", share_disabled)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>What I Need Today</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=DM+Sans:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fdf6ef;
      --bg-2: #f6d8c3;
      --ink: #2b2a28;
      --accent: #e76f51;
      --accent-2: #8b5e83;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(139, 94, 131, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #fde8dd 60%, #f8f1ea 100%);
      color: var(--ink);
      font-family: "DM Sans", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(680px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
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
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    section h2 {
      margin: 0 0 12px;
      font-size: 1.05rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    input[type="date"] {
      width: 100%;
      border: 1px solid rgba(139, 94, 131, 0.25);
      border-radius: 14px;
      padding: 12px 16px;
      font-family: inherit;
      font-size: 1rem;
      color: var(--ink);
      background: white;
    }

    .choices {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(130px, 1fr));
      gap: 10px;
    }

    .choices form {
      display: contents;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 14px;
      padding: 12px 14px;
      font-family: inherit;
      font-size: 0.95rem;
      font-weight: 500;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .sleep-btn,
    .ritual-btn {
      background: white;
      border: 1px solid rgba(139, 94, 131, 0.2);
      color: var(--ink);
    }

    .sleep-btn.selected,
    .ritual-btn.selected {
      background: linear-gradient(135deg, var(--accent) 0%, var(--accent-2) 100%);
      border-color: transparent;
      color: white;
      box-shadow: 0 8px 20px rgba(139, 94, 131, 0.3);
    }

    .emoji-row {
      display: flex;
      align-items: center;
      gap: 12px;
      flex-wrap: wrap;
      position: relative;
    }

    #emoji-trigger {
      width: 52px;
      height: 52px;
      border-radius: 50%;
      background: white;
      border: 1px dashed rgba(139, 94, 131, 0.4);
      font-size: 1.3rem;
      display: grid;
      place-items: center;
    }

    #emoji-picker {
      display: none;
      position: absolute;
      top: 60px;
      left: 0;
      z-index: 10;
      background: white;
      border-radius: 16px;
      border: 1px solid rgba(139, 94, 131, 0.15);
      box-shadow: 0 16px 40px rgba(139, 94, 131, 0.25);
      padding: 12px;
      grid-template-columns: repeat(6, 1fr);
      gap: 6px;
    }

    #emoji-picker.open {
      display: grid;
    }

    .emoji-option {
      background: transparent;
      font-size: 1.25rem;
      padding: 8px;
      border-radius: 10px;
    }

    .emoji-option:hover {
      background: rgba(231, 111, 81, 0.12);
    }

    .custom-emoji-badge {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      background: white;
      border: 1px solid rgba(139, 94, 131, 0.2);
      border-radius: 100px;
      padding: 6px 10px;
      font-size: 1.05rem;
    }

    .custom-emoji-badge button {
      padding: 0 4px;
      background: transparent;
      color: #8b857d;
      font-size: 0.9rem;
      line-height: 1;
    }

    .actions {
      display: grid;
      grid-template-columns: 1fr auto;
      gap: 12px;
    }

    #share-btn {
      background: linear-gradient(135deg, var(--accent) 0%, var(--accent-2) 100%);
      color: white;
      font-weight: 600;
      box-shadow: 0 10px 24px rgba(231, 111, 81, 0.3);
    }

    #copy-btn {
      background: white;
      border: 1px solid rgba(139, 94, 131, 0.25);
      min-width: 58px;
    }

    #copy-btn.copied {
      border-color: #2d7a4b;
      color: #2d7a4b;
    }

    button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
      box-shadow: none;
    }

    .toast {
      position: fixed;
      top: 20px;
      left: 50%;
      transform: translateX(-50%);
      background: linear-gradient(135deg, var(--accent) 0%, var(--accent-2) 100%);
      color: white;
      padding: 14px 22px;
      border-radius: 100px;
      font-weight: 500;
      box-shadow: 0 8px 24px rgba(139, 94, 131, 0.4);
      z-index: 1001;
      animation: slide-in 300ms ease-out;
    }

    .toast.leaving {
      animation: slide-out 300ms ease-out forwards;
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

    @keyframes slide-in {
      from {
        opacity: 0;
        transform: translateX(-50%) translateY(-20px);
      }
      to {
        opacity: 1;
        transform: translateX(-50%) translateY(0);
      }
    }

    @keyframes slide-out {
      from {
        opacity: 1;
        transform: translateX(-50%) translateY(0);
      }
      to {
        opacity: 0;
        transform: translateX(-50%) translateY(-20px);
      }
    }

    @keyframes pulse {
      0%, 100% {
        transform: scale(1);
      }
      50% {
        transform: scale(1.05);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>What I Need Today ✨</h1>
      <p class="subtitle">Pick a day, rate your sleep, choose your rituals, then share it.</p>
    </header>

    <section>
      <h2>Date</h2>
      <input type="date" id="date-picker" value="{{DATE}}" />
    </section>

    <section>
      <h2>How did you sleep?</h2>
      <div class="choices">
        <form method="post" action="/sleep/great">
          <button class="sleep-btn" type="submit" data-sleep="great">😊 Great</button>
        </form>
        <form method="post" action="/sleep/ok">
          <button class="sleep-btn" type="submit" data-sleep="ok">😐 OK</button>
        </form>
        <form method="post" action="/sleep/bad">
          <button class="sleep-btn" type="submit" data-sleep="bad">😞 Bad</button>
        </form>
        <form method="post" action="/sleep/nightmare">
          <button class="sleep-btn" type="submit" data-sleep="nightmare">😱 Nightmare</button>
        </form>
      </div>
    </section>

    <section>
      <h2>Rituals</h2>
      <div class="choices">
        <form method="post" action="/ritual/coffee">
          <button class="ritual-btn" type="submit" data-ritual="coffee">☕ Coffee</button>
        </form>
        <form method="post" action="/ritual/learning">
          <button class="ritual-btn" type="submit" data-ritual="learning">📚 Learning</button>
        </form>
        <form method="post" action="/ritual/working">
          <button class="ritual-btn" type="submit" data-ritual="working">🔨 Working</button>
        </form>
        <form method="post" action="/ritual/fruit">
          <button class="ritual-btn" type="submit" data-ritual="fruit">🍓 Fruit</button>
        </form>
      </div>
    </section>

    <section>
      <h2>And also</h2>
      <div class="emoji-row">
        <button id="emoji-trigger" type="button" aria-label="Add emoji">
          <span id="selected-emoji">➕</span>
        </button>
        <div id="emoji-picker" role="menu">
          <button class="emoji-option" type="button" data-emoji="🌈">🌈</button>
          <button class="emoji-option" type="button" data-emoji="🎵">🎵</button>
          <button class="emoji-option" type="button" data-emoji="🧘">🧘</button>
          <button class="emoji-option" type="button" data-emoji="🚶">🚶</button>
          <button class="emoji-option" type="button" data-emoji="🎨">🎨</button>
          <button class="emoji-option" type="button" data-emoji="📖">📖</button>
          <button class="emoji-option" type="button" data-emoji="🛁">🛁</button>
          <button class="emoji-option" type="button" data-emoji="🌿">🌿</button>
          <button class="emoji-option" type="button" data-emoji="☀️">☀️</button>
          <button class="emoji-option" type="button" data-emoji="💧">💧</button>
          <button class="emoji-option" type="button" data-emoji="🍫">🍫</button>
          <button class="emoji-option" type="button" data-emoji="✉️">✉️</button>
        </div>
        <div id="custom-emoji-display"></div>
      </div>
    </section>

    <section class="actions">
      <button id="share-btn" type="button" {{SHARE_DISABLED}}>Share my day 💌</button>
      <button id="copy-btn" type="button" aria-label="Copy to clipboard" {{SHARE_DISABLED}}>
        <span class="copy-icon">📋</span>
      </button>
    </section>
  </main>

  <script>
    const datePicker = document.getElementById('date-picker');
    const sleepButtons = Array.from(document.querySelectorAll('.sleep-btn'));
    const ritualButtons = Array.from(document.querySelectorAll('.ritual-btn'));
    const emojiTrigger = document.getElementById('emoji-trigger');
    const emojiPicker = document.getElementById('emoji-picker');
    const selectedEmojiDisplay = document.getElementById('selected-emoji');
    const customEmojiDisplay = document.getElementById('custom-emoji-display');
    const shareBtn = document.getElementById('share-btn');
    const copyBtn = document.getElementById('copy-btn');

    const applySelection = (data) => {
      datePicker.value = data.date || '';
      sleepButtons.forEach((btn) => {
        btn.classList.toggle('selected', btn.dataset.sleep === data.sleep);
      });
      ritualButtons.forEach((btn) => {
        btn.classList.toggle('selected', data.rituals.includes(btn.dataset.ritual));
      });

      customEmojiDisplay.innerHTML = '';
      data.custom_emojis.forEach((emoji) => {
        const badge = document.createElement('div');
        badge.className = 'custom-emoji-badge';
        const glyph = document.createElement('span');
        glyph.textContent = emoji;
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.textContent = '×';
        remove.setAttribute('aria-label', 'Remove emoji');
        remove.addEventListener('click', () => {
          send('/api/emoji/remove', { emoji }).catch(() => showToast('Something went wrong.'));
        });
        badge.append(glyph, remove);
        customEmojiDisplay.appendChild(badge);
      });

      selectedEmojiDisplay.textContent = data.custom_emojis.length > 0 ? '✨' : '➕';
      shareBtn.disabled = !data.shareable;
      copyBtn.disabled = !data.shareable;
    };

    const send = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      applySelection(await res.json());
    };

    const hydrate = async () => {
      const res = await fetch('/api/selection');
      if (res.ok) {
        applySelection(await res.json());
      }
    };

    const fetchMessage = async () => {
      const res = await fetch('/api/message');
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to build the message');
      }
      return (await res.json()).message;
    };

    const showToast = (text) => {
      const toast = document.createElement('div');
      toast.className = 'toast';
      toast.textContent = text;
      document.body.appendChild(toast);
      setTimeout(() => {
        toast.classList.add('leaving');
        setTimeout(() => toast.remove(), 300);
      }, 3000);
    };

    datePicker.addEventListener('change', () => {
      send('/api/date', { date: datePicker.value }).catch(() => showToast('Something went wrong.'));
    });

    sleepButtons.forEach((btn) => {
      btn.closest('form').addEventListener('submit', (event) => {
        event.preventDefault();
        send('/api/sleep', { value: btn.dataset.sleep }).catch(() => showToast('Something went wrong.'));
      });
    });

    ritualButtons.forEach((btn) => {
      btn.closest('form').addEventListener('submit', (event) => {
        event.preventDefault();
        send('/api/ritual', { value: btn.dataset.ritual }).catch(() => showToast('Something went wrong.'));
      });
    });

    emojiTrigger.addEventListener('click', (event) => {
      event.stopPropagation();
      emojiPicker.classList.toggle('open');
    });

    document.addEventListener('click', (event) => {
      if (!emojiPicker.contains(event.target) && event.target !== emojiTrigger) {
        emojiPicker.classList.remove('open');
      }
    });

    emojiPicker.querySelectorAll('.emoji-option').forEach((option) => {
      option.addEventListener('click', (event) => {
        event.stopPropagation();
        send('/api/emoji/add', { emoji: option.dataset.emoji }).catch(() => showToast('Something went wrong.'));
        emojiPicker.classList.remove('open');
      });
    });

    const fallbackShare = (message) => {
      navigator.clipboard.writeText(message).then(() => {
        showToast('Copied to clipboard! Share it with your friends 🎉');
      }).catch(() => {
        alert(message);
      });
    };

    shareBtn.addEventListener('click', async () => {
      let message;
      try {
        message = await fetchMessage();
      } catch (err) {
        showToast(err.message);
        return;
      }

      if (navigator.share) {
        try {
          await navigator.share({ title: 'What I Need Today ✨', text: message });
        } catch (err) {
          if (err.name !== 'AbortError') {
            fallbackShare(message);
          }
        }
      } else {
        fallbackShare(message);
      }

      shareBtn.style.animation = 'none';
      setTimeout(() => {
        shareBtn.style.animation = 'pulse 0.5s ease-in-out';
      }, 10);
    });

    copyBtn.addEventListener('click', async () => {
      let message;
      try {
        message = await fetchMessage();
      } catch (err) {
        showToast(err.message);
        return;
      }

      try {
        await navigator.clipboard.writeText(message);
        const icon = copyBtn.querySelector('.copy-icon');
        const original = icon.textContent;
        icon.textContent = '✓';
        copyBtn.classList.add('copied');
        showToast('Copied to clipboard! 📋');
        setTimeout(() => {
          icon.textContent = original;
          copyBtn.classList.remove('copied');
        }, 2000);
      } catch (err) {
        showToast('Failed to copy. Please try again.');
      }
    });

    hydrate();
  </script>
</body>
</html>
"#;
