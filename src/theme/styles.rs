//! Global CSS styles for the portfolio.
//!
//! Dark editorial layout with a single accent color.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0b0d10;
  --bg-raised: #12161b;
  --bg-card: #161b21;
  --border: #232a33;

  /* Accent */
  --accent: #4fd1c5;
  --accent-strong: #38b2ac;
  --accent-glow: rgba(79, 209, 197, 0.25);

  /* Text */
  --text-primary: #f2f4f7;
  --text-secondary: rgba(242, 244, 247, 0.72);
  --text-muted: rgba(242, 244, 247, 0.5);

  /* Semantic */
  --success: #48bb78;
  --danger: #f56565;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', Consolas, monospace;

  /* Layout */
  --nav-height: 72px;
  --radius: 12px;
  --ease: cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

/* Focus rings only while navigating with the keyboard */
*:focus {
  outline: none;
}

body.keyboard-navigation *:focus {
  outline: 2px solid var(--accent);
  outline-offset: 3px;
}

/* === Scroll Progress === */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  height: 3px;
  width: 0;
  background: linear-gradient(90deg, var(--accent), var(--accent-strong));
  z-index: 1001;
  transition: width 0.1s linear;
}

/* === Navigation === */
.nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 1000;
  transition: background 0.3s var(--ease), box-shadow 0.3s var(--ease);
}

.nav.scrolled {
  background: rgba(11, 13, 16, 0.92);
  backdrop-filter: blur(12px);
  box-shadow: 0 1px 0 var(--border);
}

.nav-container {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 24px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 24px;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.2rem;
  letter-spacing: 0.02em;
}

.nav-links {
  display: flex;
  gap: 28px;
}

.nav-link {
  color: var(--text-secondary);
  font-size: 0.95rem;
  position: relative;
  transition: color 0.2s var(--ease);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  right: 0;
  bottom: -6px;
  height: 2px;
  background: var(--accent);
}

.nav-cta {
  padding: 8px 18px;
  border: 1px solid var(--accent);
  border-radius: 999px;
  color: var(--accent);
  font-size: 0.9rem;
  transition: background 0.2s var(--ease), color 0.2s var(--ease);
}

.nav-cta:hover {
  background: var(--accent);
  color: var(--bg);
}

.mobile-menu-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  padding: 8px;
}

.mobile-menu-toggle span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform 0.3s var(--ease), opacity 0.3s var(--ease);
}

.mobile-menu-toggle.active span:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.mobile-menu-toggle.active span:nth-child(2) {
  opacity: 0;
}

.mobile-menu-toggle.active span:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

.mobile-menu {
  position: fixed;
  inset: var(--nav-height) 0 0 0;
  background: var(--bg);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 28px;
  font-size: 1.3rem;
  z-index: 999;
  opacity: 0;
  pointer-events: none;
  transform: translateY(-12px);
  transition: opacity 0.3s var(--ease), transform 0.3s var(--ease);
}

.mobile-menu.active {
  opacity: 1;
  pointer-events: auto;
  transform: translateY(0);
}

/* === Sections === */
.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 24px;
}

.section {
  padding: 110px 0 60px;
}

.section-title {
  font-size: 2.2rem;
  margin-bottom: 40px;
}

.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
}

.hero-greeting {
  color: var(--accent);
  font-family: var(--font-mono);
}

.hero-title {
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  line-height: 1.1;
  margin: 12px 0 20px;
}

.hero-subtitle {
  color: var(--text-secondary);
  font-size: 1.2rem;
  max-width: 560px;
}

.hero-actions {
  display: flex;
  gap: 16px;
  margin-top: 36px;
}

.btn {
  display: inline-block;
  padding: 12px 26px;
  border-radius: 999px;
  font-weight: 600;
  transition: transform 0.2s var(--ease), background 0.2s var(--ease);
}

.btn:hover {
  transform: translateY(-2px);
}

.btn-primary {
  background: var(--accent);
  color: var(--bg);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: wait;
  transform: none;
}

.btn-secondary {
  border: 1px solid var(--border);
}

.about-content p {
  color: var(--text-secondary);
  max-width: 720px;
  margin-bottom: 16px;
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition-property: opacity, transform;
  transition-duration: 0.8s;
  transition-timing-function: var(--ease);
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

.skill-tag.reveal {
  transform: translateY(20px);
  transition-duration: 0.6s;
}

.skill-tag.reveal.revealed {
  transform: translateY(0);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 24px;
}

.skill-group {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 24px;
}

.skill-group-title {
  margin-bottom: 16px;
  font-size: 1.05rem;
}

.skill-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.skill-tag {
  padding: 6px 12px;
  border-radius: 999px;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  font-size: 0.85rem;
}

/* === Timeline === */
.timeline {
  border-left: 2px solid var(--border);
  padding-left: 28px;
  display: flex;
  flex-direction: column;
  gap: 36px;
}

.timeline-period {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.timeline-place {
  color: var(--text-muted);
}

.timeline-summary {
  color: var(--text-secondary);
  margin-top: 6px;
}

/* === Cards === */
.projects-grid,
.current-grid,
.cert-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 28px;
}

.card-slot {
  display: contents;
}

.project-card,
.current-card,
.cert-card {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  transition: transform 0.3s var(--ease), border-color 0.3s var(--ease);
}

.project-card {
  cursor: pointer;
}

.project-card:hover,
.current-card:hover,
.cert-card:hover {
  transform: translateY(-4px);
  border-color: var(--accent);
}

.project-image img,
.current-image img {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
}

.project-content,
.current-card > :not(.current-image) {
  padding: 0 22px;
}

.project-content {
  padding: 22px;
}

.project-header,
.current-title-row {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 12px;
  margin: 18px 0 10px;
}

.project-header {
  margin-top: 0;
}

.project-type,
.current-status {
  color: var(--accent);
  font-size: 0.8rem;
  font-family: var(--font-mono);
  white-space: nowrap;
}

.project-description,
.current-description {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

.project-tech,
.current-meta,
.cert-tags,
.modal-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
  margin: 16px 0;
}

.tech-tag,
.tag {
  padding: 3px 10px;
  border-radius: 6px;
  background: var(--bg-raised);
  color: var(--text-secondary);
  font-size: 0.78rem;
  font-family: var(--font-mono);
}

.current-focus {
  color: var(--text-muted);
  font-size: 0.85rem;
  margin-bottom: 12px;
}

.project-links,
.current-links,
.cert-actions,
.modal-links {
  display: flex;
  gap: 16px;
  padding-bottom: 18px;
}

.project-link,
.current-link,
.cert-link,
.modal-link {
  color: var(--accent);
  font-weight: 600;
  font-size: 0.9rem;
}

.project-link.disabled,
.current-link.disabled,
.cert-link.disabled,
.modal-link.disabled {
  color: var(--text-muted);
  cursor: not-allowed;
}

/* === Certifications === */
.cert-card {
  padding: 22px;
}

.cert-top {
  display: flex;
  justify-content: space-between;
  gap: 12px;
}

.cert-issuer {
  display: flex;
  gap: 12px;
  align-items: center;
}

.cert-issuer-logo {
  width: 40px;
  height: 40px;
  object-fit: contain;
  border-radius: 8px;
  background: #fff;
}

.cert-subtitle {
  color: var(--text-muted);
  font-size: 0.85rem;
}

.cert-pill {
  align-self: flex-start;
  padding: 3px 10px;
  border-radius: 999px;
  border: 1px solid var(--accent);
  color: var(--accent);
  font-size: 0.75rem;
  white-space: nowrap;
}

.cert-desc {
  color: var(--text-secondary);
  font-size: 0.92rem;
  margin-top: 14px;
}

.thumb-btn {
  position: relative;
  width: 100%;
  border-radius: 8px;
  overflow: hidden;
  margin-bottom: 16px;
}

.thumb {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
}

.thumb-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.55);
  opacity: 0;
  transition: opacity 0.2s var(--ease);
}

.thumb-btn:hover .thumb-overlay {
  opacity: 1;
}

.cert-more-wrap {
  display: flex;
  justify-content: center;
  margin: 32px 0;
}

.cert-more-btn {
  display: inline-flex;
  align-items: center;
  gap: 10px;
  padding: 10px 22px;
  border: 1px solid var(--border);
  border-radius: 999px;
}

.cert-more-icon {
  font-family: var(--font-mono);
  color: var(--accent);
}

.cert-more[hidden] {
  display: none;
}

/* === Project Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
}

.modal-overlay {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
}

.modal-content {
  position: relative;
  width: min(960px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.modal-close {
  position: absolute;
  top: 12px;
  right: 16px;
  font-size: 2rem;
  line-height: 1;
  z-index: 1;
}

.gallery-main {
  position: relative;
  background: #000;
}

.gallery-main img {
  width: 100%;
  max-height: 460px;
  object-fit: contain;
}

.gallery-prev,
.gallery-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 44px;
  height: 44px;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.6);
  font-size: 1.6rem;
}

.gallery-prev {
  left: 12px;
}

.gallery-next {
  right: 12px;
}

.gallery-counter {
  position: absolute;
  bottom: 12px;
  right: 16px;
  padding: 2px 10px;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.6);
  font-family: var(--font-mono);
  font-size: 0.8rem;
}

.gallery-thumbnails {
  display: flex;
  gap: 8px;
  padding: 12px;
  overflow-x: auto;
}

.gallery-thumbnail {
  width: 84px;
  height: 56px;
  object-fit: cover;
  border-radius: 6px;
  opacity: 0.5;
  cursor: pointer;
  border: 2px solid transparent;
  transition: opacity 0.2s var(--ease);
}

.gallery-thumbnail.active {
  opacity: 1;
  border-color: var(--accent);
}

.modal-body {
  padding: 28px;
}

.modal-header {
  margin-bottom: 18px;
}

.modal-type {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.modal-description {
  color: var(--text-secondary);
}

.modal-description p + p {
  margin-top: 12px;
}

.modal-section {
  margin-top: 24px;
}

.modal-features {
  padding-left: 20px;
  color: var(--text-secondary);
}

.modal-links {
  margin-top: 28px;
}

.modal-link.primary {
  padding: 8px 18px;
  border-radius: 999px;
  background: var(--accent);
  color: var(--bg);
}

/* === Certificate Preview === */
.cert-modal {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
  background: rgba(0, 0, 0, 0.85);
}

.cert-modal-content {
  position: relative;
  width: min(820px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--bg-raised);
  border-radius: var(--radius);
  padding: 28px;
}

.cert-modal-close {
  position: absolute;
  top: 10px;
  right: 16px;
  font-size: 2rem;
  line-height: 1;
}

.cert-modal-title {
  margin-bottom: 16px;
  padding-right: 40px;
}

.cert-modal-image {
  width: 100%;
  border-radius: 8px;
  margin-bottom: 20px;
}

/* === Contact === */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 40px;
}

.contact-methods {
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.contact-method {
  padding: 18px;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.contact-label {
  display: block;
  color: var(--text-muted);
  font-size: 0.8rem;
}

.contact-value {
  color: var(--accent);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.form-group input,
.form-group textarea {
  padding: 12px 14px;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--bg-card);
  color: var(--text-primary);
  font: inherit;
}

.form-group input:focus,
.form-group textarea:focus {
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.form-status {
  display: none;
  padding: 12px 16px;
  border-radius: 8px;
}

.form-status.success {
  display: block;
  background: rgba(72, 187, 120, 0.12);
  color: var(--success);
}

.form-status.error {
  display: block;
  background: rgba(245, 101, 101, 0.12);
  color: var(--danger);
}

/* === Back To Top === */
.back-to-top {
  position: fixed;
  right: 24px;
  bottom: 24px;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  background: var(--accent);
  color: var(--bg);
  font-size: 1.3rem;
  opacity: 0;
  pointer-events: none;
  transform: translateY(12px);
  transition: opacity 0.3s var(--ease), transform 0.3s var(--ease);
  z-index: 900;
}

.back-to-top.show {
  opacity: 1;
  pointer-events: auto;
  transform: translateY(0);
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  padding: 32px 24px;
  display: flex;
  justify-content: space-between;
  color: var(--text-muted);
  max-width: 1200px;
  margin: 60px auto 0;
}

/* === Responsive === */
@media (max-width: 900px) {
  .nav-links,
  .nav-container > .nav-cta {
    display: none;
  }

  .mobile-menu-toggle {
    display: flex;
  }

  .contact-layout {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 600px) {
  .projects-grid,
  .current-grid,
  .cert-grid {
    grid-template-columns: 1fr;
  }

  .hero-actions {
    flex-direction: column;
    align-items: flex-start;
  }
}
"#;
