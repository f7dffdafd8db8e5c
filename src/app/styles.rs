//! Global CSS for the Eco/Tribe page.
//!
//! Custom properties are keyed off the `dark` class that the theme
//! controller sets on the document root, so toggling the theme restyles the
//! whole tree with a single class change.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Light mode */
  --bg: #ffffff;
  --ink: #000000;
  --ink-soft: rgba(0, 0, 0, 0.65);
  --ink-faint: rgba(0, 0, 0, 0.4);
  --surface: rgba(0, 0, 0, 0.04);
  --line: rgba(0, 0, 0, 0.15);

  /* Brand */
  --tribe-primary: #7fff6a;
  --tribe-light-primary: #3ddc84;
  --tribe-secondary: #1a3a2a;
  --tribe-tertiary: #b8e6c9;

  /* Typography */
  --font-brand: 'Archivo', 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', monospace;
}

:root.dark {
  --bg: #050505;
  --ink: #ffffff;
  --ink-soft: rgba(255, 255, 255, 0.65);
  --ink-faint: rgba(255, 255, 255, 0.35);
  --surface: rgba(255, 255, 255, 0.05);
  --line: rgba(255, 255, 255, 0.12);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-brand);
  background: var(--bg);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
  transition: background-color 500ms ease, color 500ms ease;
}

::selection {
  background: var(--tribe-primary);
  color: #000000;
}

.page {
  position: relative;
  min-height: 100vh;
}

main {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  width: 100%;
}

main.portal {
  height: 100vh;
  overflow: hidden;
}

/* === Intro Sequence === */
.intro-overlay {
  position: fixed;
  inset: 0;
  z-index: 9999;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #050505;
}

.intro-inner {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.intro-rule {
  height: 1px;
  width: 6rem;
  margin-bottom: 2rem;
  background: rgba(127, 255, 106, 0.5);
  animation: pulse 2s ease-in-out infinite;
}

.intro-brand {
  font-family: var(--font-brand);
  font-weight: 700;
  font-size: 0.875rem;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: #ffffff;
  animation: pulse 2s ease-in-out infinite;
}

.intro-sub {
  margin-top: 0.5rem;
  font-family: var(--font-mono);
  font-size: 10px;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: #52525b;
}

/* === Background Layers === */
.bg-layers {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.wave-grid {
  position: absolute;
  inset: 0;
}

.glow-field {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.glow-wrap {
  width: 100%;
  height: 100%;
}

.glow-wrap-dark {
  mix-blend-mode: normal;
  opacity: 0.3;
}

.glow-wrap-light {
  mix-blend-mode: multiply;
  opacity: 0.5;
}

.glow {
  position: absolute;
  border-radius: 9999px;
  opacity: 0.4;
  animation: breathe 10s ease-in-out infinite;
}

.glow-primary {
  top: -20%;
  left: -10%;
  width: 80vw;
  height: 80vw;
  background: var(--tribe-primary);
  filter: blur(140px);
}

.glow-secondary {
  top: 20%;
  right: -10%;
  width: 60vw;
  height: 60vw;
  background: var(--tribe-light-primary);
  filter: blur(140px);
}

.glow-fog {
  top: 40%;
  left: 20%;
  width: 50vw;
  height: 50vw;
  background: var(--tribe-tertiary);
  filter: blur(160px);
  opacity: 0.3;
}

:root.dark .glow-fog {
  background: var(--tribe-secondary);
}

/* === Custom Cursor === */
.custom-cursor {
  position: fixed;
  top: -6px;
  left: -6px;
  z-index: 10000;
  width: 12px;
  height: 12px;
  border-radius: 9999px;
  background: var(--tribe-primary);
  mix-blend-mode: difference;
  pointer-events: none;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 2rem;
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--line);
}

.navbar-brand {
  font-weight: 700;
  font-size: 0.875rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  cursor: pointer;
  background: none;
  border: none;
  color: var(--ink);
}

.navbar-items {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  list-style: none;
}

.navbar-link {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  background: none;
  border: none;
  cursor: pointer;
  color: var(--ink-soft);
  transition: color 200ms ease;
}

.navbar-link:hover,
.navbar-link[aria-current="page"] {
  color: var(--ink);
}

.theme-toggle {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  border: 1px solid var(--line);
  background: none;
  cursor: pointer;
  color: var(--ink);
}

/* === Sections === */
section {
  padding: 6rem 2rem;
  max-width: 72rem;
  margin: 0 auto;
  width: 100%;
}

.eyebrow {
  font-family: var(--font-mono);
  font-size: 0.7rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--tribe-light-primary);
}

h1, h2 {
  font-weight: 700;
  letter-spacing: -0.02em;
}

.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.hero h1 {
  font-size: clamp(3rem, 9vw, 7rem);
  line-height: 1.02;
  text-transform: uppercase;
}

.hero-tagline {
  max-width: 32rem;
  margin-top: 1.5rem;
  color: var(--ink-soft);
  font-size: 1.125rem;
}

.cta {
  display: inline-block;
  margin-top: 2.5rem;
  padding: 0.9rem 2.25rem;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: #000000;
  background: var(--tribe-primary);
  border: none;
  cursor: pointer;
  transition: transform 200ms ease;
}

.cta:hover {
  transform: translateY(-2px);
}

.prose p {
  max-width: 40rem;
  margin-top: 1.25rem;
  font-size: 1.125rem;
  color: var(--ink-soft);
}

.step-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 1.5rem;
  margin-top: 3rem;
}

.step {
  padding: 1.5rem;
  border: 1px solid var(--line);
  background: var(--surface);
}

.step-index {
  font-family: var(--font-mono);
  color: var(--tribe-light-primary);
  font-size: 0.8rem;
}

.step h3 {
  margin-top: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  font-size: 0.95rem;
}

.step p {
  margin-top: 0.5rem;
  color: var(--ink-soft);
  font-size: 0.9rem;
}

.protocol-list {
  list-style: none;
  margin-top: 2.5rem;
  border-top: 1px solid var(--line);
}

.protocol-list li {
  display: flex;
  gap: 2rem;
  padding: 1.25rem 0;
  border-bottom: 1px solid var(--line);
  font-family: var(--font-mono);
  font-size: 0.9rem;
}

.protocol-list .idx {
  color: var(--tribe-light-primary);
}

/* === Forms === */
.field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  margin-top: 1.25rem;
}

.field label {
  font-family: var(--font-mono);
  font-size: 0.7rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--ink-faint);
}

.field input {
  padding: 0.8rem 1rem;
  font-size: 1rem;
  color: var(--ink);
  background: var(--surface);
  border: 1px solid var(--line);
  outline: none;
}

.field input:focus {
  border-color: var(--tribe-light-primary);
}

.form-note {
  margin-top: 1rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--ink-faint);
}

.login-screen {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

.login-card {
  width: 100%;
  max-width: 24rem;
  padding: 2.5rem;
  border: 1px solid var(--line);
  background: var(--surface);
  backdrop-filter: blur(12px);
}

/* === Admin Portal === */
.portal-shell {
  height: 100vh;
  display: flex;
  flex-direction: column;
  padding: 2rem;
}

.portal-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-bottom: 1.5rem;
  border-bottom: 1px solid var(--line);
}

.portal-table {
  width: 100%;
  margin-top: 2rem;
  border-collapse: collapse;
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.portal-table th,
.portal-table td {
  text-align: left;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--line);
}

.portal-table th {
  font-size: 0.7rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--ink-faint);
}

.status-ok {
  color: var(--tribe-light-primary);
}

.ghost-button {
  padding: 0.6rem 1.5rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--ink);
  background: none;
  border: 1px solid var(--line);
  cursor: pointer;
}

.ghost-button:hover {
  border-color: var(--tribe-light-primary);
}

/* === Footer === */
footer {
  position: relative;
  z-index: 10;
  padding: 2rem;
  text-align: center;
  font-family: var(--font-mono);
  font-size: 0.7rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--ink-faint);
  border-top: 1px solid var(--line);
}

/* === Animation === */
@keyframes breathe {
  0%, 100% { transform: scale(1) translateY(0); }
  50% { transform: scale(1.08) translateY(-2%); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}
"#;
