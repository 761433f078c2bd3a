//! Global CSS styles for the YRES widgets.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* TEAL (Brand, Actions, Progress) */
  --teal: #3D96AB;
  --teal-dark: #2d7a8f;
  --teal-light: #6bb3c4;

  /* NEUTRALS */
  --ink: #1f2a30;
  --ink-muted: #5b6770;
  --surface: #ffffff;
  --surface-alt: #f4f7f8;
  --track: #e0e0e0;
  --disabled: #b8c0c4;

  /* CATEGORIES */
  --cat-stem: #3D96AB;
  --cat-arts: #c4548a;
  --cat-sports: #4e9a4a;
  --cat-academic: #7a5bc4;
  --cat-leadership: #d08a2c;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-flip: 600ms cubic-bezier(0.4, 0.2, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--surface-alt);
  line-height: 1.5;
}

.page-root { min-height: 100vh; outline: none; }

.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.page__header { text-align: center; margin-bottom: 2rem; }
.page__title { font-size: 2rem; color: var(--teal-dark); }
.page__lede { color: var(--ink-muted); }

/* === Navigation === */
.site-nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.5rem;
  background: var(--teal);
  color: var(--surface);
}

.site-nav__title { font-weight: 700; letter-spacing: 0.08em; }
.site-nav__links { display: flex; gap: 1.25rem; }

.site-nav__link {
  color: var(--surface);
  text-decoration: none;
  opacity: 0.8;
  transition: opacity var(--transition-fast);
}

.site-nav__link:hover, .site-nav__link.active { opacity: 1; text-decoration: underline; }

/* === Focus === */
a:focus-visible, button:focus-visible, [tabindex="-1"]:focus {
  outline: 3px solid var(--teal-light);
  outline-offset: 2px;
}

/* === Donation Card === */
.donation-card {
  max-width: 560px;
  margin: 0 auto;
  padding: 2rem;
  background: var(--surface);
  border-radius: 16px;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
}

.donation-card__header { text-align: center; margin-bottom: 1.5rem; }
.donation-card__title { font-size: 2rem; color: var(--teal-dark); }
.donation-card__subtitle { color: var(--ink-muted); }

.donation-card__cta { text-align: center; margin-bottom: 1.5rem; }

.donation-card__button {
  display: inline-block;
  padding: 0.75rem 2rem;
  border-radius: 999px;
  background: var(--teal);
  color: var(--surface);
  font-weight: 600;
  text-decoration: none;
  transition: background var(--transition-fast);
}

.donation-card__button:hover { background: var(--teal-dark); }

.donation-card__heading, .donation-card__subheading {
  color: var(--teal-dark);
  margin-bottom: 0.5rem;
}

.donation-card__paragraph { margin-bottom: 0.75rem; }
.donation-card__progress { margin-top: 1.5rem; }

.donation-card__track {
  height: 28px;
  border-radius: 14px;
  background: var(--track);
  overflow: hidden;
}

.donation-card__fill {
  display: flex;
  align-items: center;
  justify-content: flex-end;
  height: 100%;
  padding-right: 0.6rem;
  background: var(--teal);
  transition: width 800ms ease;
}

.donation-card__bar-label { color: var(--surface); font-size: 0.8rem; font-weight: 700; }
.donation-card__caption { margin-top: 0.5rem; text-align: center; }
.donation-card__note { color: var(--ink-muted); }

/* === Program Grid === */
.program-cards {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.program-cards__loading, .program-cards__fallback {
  text-align: center;
  color: #666;
}

/* === Program Card === */
.program-card {
  perspective: 1200px;
  min-height: 520px;
}

.program-card__flipper {
  position: relative;
  width: 100%;
  height: 100%;
  min-height: 520px;
  transform-style: preserve-3d;
  transition: transform var(--transition-flip);
}

.program-card[aria-expanded="true"] .program-card__flipper { transform: rotateY(180deg); }

.program-card__front, .program-card__back {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  border-radius: 12px;
  background: var(--surface);
  box-shadow: 0 6px 18px rgba(0, 0, 0, 0.08);
  overflow: hidden;
}

.program-card__back { transform: rotateY(180deg); }

.program-card__image { width: 100%; height: 180px; object-fit: cover; }
.program-card__content, .program-card__back-content { padding: 1rem 1.25rem; }

.program-card__header { margin-bottom: 0.75rem; }

.program-card__category {
  display: inline-block;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--teal);
  color: var(--surface);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.program-card__category--stem { background: var(--cat-stem); }
.program-card__category--arts { background: var(--cat-arts); }
.program-card__category--sports { background: var(--cat-sports); }
.program-card__category--academic { background: var(--cat-academic); }
.program-card__category--leadership { background: var(--cat-leadership); }

.program-card__title {
  margin-top: 0.5rem;
  font-size: 1.2rem;
  display: -webkit-box;
  -webkit-box-orient: vertical;
  -webkit-line-clamp: var(--title-lines, 2);
  overflow: hidden;
}

.program-card__meta { font-size: 0.9rem; color: var(--ink-muted); }
.program-card__meta-item { margin-bottom: 0.15rem; }

.program-card__tags { display: flex; flex-wrap: wrap; gap: 0.35rem; margin: 0.5rem 0; }

.program-card__tag {
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  background: var(--surface-alt);
  font-size: 0.75rem;
}

.program-card__spots { color: #b3462c; font-weight: 600; margin: 0.35rem 0; }

.program-card__actions { display: flex; gap: 0.5rem; margin-top: 0.75rem; }

.program-card__btn {
  flex: 1;
  padding: 0.55rem 0.9rem;
  border-radius: 8px;
  border: 2px solid var(--teal);
  font: inherit;
  font-weight: 600;
  text-align: center;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.program-card__btn--primary { background: var(--teal); color: var(--surface); }
.program-card__btn--primary:hover { background: var(--teal-dark); border-color: var(--teal-dark); }
.program-card__btn--secondary { background: transparent; color: var(--teal); }
.program-card__btn--secondary:hover { background: var(--teal); color: var(--surface); }

.program-card__btn--disabled {
  background: var(--disabled);
  border-color: var(--disabled);
  color: var(--surface);
  cursor: not-allowed;
  pointer-events: none;
}

.program-card__back-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.program-card__back-title { font-size: 1.15rem; color: var(--teal-dark); }

.program-card__close {
  border: none;
  background: transparent;
  font-size: 1.1rem;
  cursor: pointer;
  color: var(--ink-muted);
}

.program-card__close:hover { color: var(--ink); }

.program-card__blurb { margin-bottom: 0.75rem; }
.program-card__detail-list { padding-left: 1.2rem; margin-bottom: 1rem; }
.program-card__detail-item { margin-bottom: 0.25rem; }

.program-card__back-cta { position: absolute; left: 1.25rem; right: 1.25rem; bottom: 1.25rem; display: flex; }

@media (prefers-reduced-motion: reduce) {
  .program-card__flipper, .donation-card__fill { transition: none; }
}
"#;
