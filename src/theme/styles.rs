//! Global CSS styles for the portfolio page.
//!
//! Light editorial layout with an indigo/violet accent. Entrance transitions are inline (see `portfolio_core::motion`);
//! only static looks and keyframes live here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ACCENT */
  --indigo: #667eea;
  --indigo-dark: #5a6fd8;
  --violet: #764ba2;
  --coral: #ff6b6b;
  --link-blue: #007AFF;

  /* SURFACES */
  --paper: #ffffff;
  --mist: #f8f9fa;
  --ink: #1a1a1a;

  /* TEXT */
  --text-primary: #1a1a1a;
  --text-body: #555555;
  --text-muted: #666666;

  /* SEMANTIC */
  --success: #28a745;
  --danger: #dc3545;

  --hero-gradient: linear-gradient(135deg, #667eea 0%, #764ba2 100%);

  /* Typography */
  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--text-primary);
  line-height: 1.6;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

.app-root {
  min-height: 100vh;
  position: relative;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
}

.section {
  padding: 6rem 0;
}

.section.alt {
  background: var(--mist);
}

/* === Click effects === */
.effect-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 9999;
  overflow: hidden;
}

.click-effect {
  position: fixed;
  width: 24px;
  height: 24px;
  font-size: 24px;
  line-height: 24px;
  text-align: center;
  pointer-events: none;
  user-select: none;
  animation-name: ghost-float;
  animation-timing-function: ease-out;
  animation-fill-mode: forwards;
}

@keyframes ghost-float {
  0% {
    opacity: 1;
    transform: translate(0, 0) scale(1);
  }
  100% {
    opacity: 0;
    transform: translate(var(--drift-x), calc(-1 * var(--rise))) scale(var(--end-scale));
  }
}

/* === Entrances === */
@keyframes entrance {
  from {
    opacity: var(--entrance-opacity, 0);
    transform: var(--entrance-from, none);
  }
  to {
    opacity: 1;
    transform: none;
  }
}

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  padding: 1.25rem 0;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal), padding var(--transition-normal);
}

.navbar.scrolled {
  padding: 0.75rem 0;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(10px);
  box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
}

.nav-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--paper);
  cursor: pointer;
  background: none;
  border: none;
}

.navbar.scrolled .nav-logo {
  color: var(--indigo);
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  background: none;
  border: none;
  font: inherit;
  font-weight: 500;
  color: rgba(255, 255, 255, 0.9);
  cursor: pointer;
  transition: color var(--transition-fast);
}

.navbar.scrolled .nav-link {
  color: var(--text-primary);
}

.nav-link:hover,
.navbar.scrolled .nav-link:hover {
  color: var(--indigo);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  font-size: 1.5rem;
  color: var(--paper);
  cursor: pointer;
}

.navbar.scrolled .menu-toggle {
  color: var(--text-primary);
}

@media (max-width: 768px) {
  .menu-toggle {
    display: block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--paper);
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
  }

  .nav-links.open {
    display: flex;
  }

  .nav-links .nav-link {
    display: block;
    width: 100%;
    padding: 1rem 2rem;
    text-align: left;
    color: var(--text-primary);
  }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  color: var(--paper);
  background: var(--hero-gradient);
  position: relative;
  overflow: hidden;
}

.hero-content {
  max-width: 800px;
  padding: 0 2rem;
}

.hero-greeting {
  font-size: 1.25rem;
  opacity: 0.9;
  margin-bottom: 0.5rem;
}

.hero-name {
  font-size: 3.5rem;
  font-weight: 800;
  line-height: 1.1;
  margin-bottom: 1rem;
}

.hero-title {
  font-size: 1.5rem;
  font-weight: 300;
  margin-bottom: 0.5rem;
}

.hero-title .amp {
  color: var(--coral);
  margin: 0 0.5rem;
}

.hero-location {
  opacity: 0.8;
  margin-bottom: 2.5rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
  margin-bottom: 2.5rem;
}

.hero .contribution-graph {
  margin: 0 auto 2rem;
  max-width: 500px;
  padding: 1.5rem;
  border-radius: 15px;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(10px);
}

.contribution-caption {
  margin-top: 1rem;
  font-weight: 500;
  color: rgba(255, 255, 255, 0.8);
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  background: none;
  border: none;
  color: var(--paper);
  opacity: 0.7;
  font-size: 2rem;
  cursor: pointer;
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 20%, 50%, 80%, 100% {
    transform: translate(-50%, 0);
  }
  40% {
    transform: translate(-50%, -10px);
  }
  60% {
    transform: translate(-50%, -5px);
  }
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-glass,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.875rem 2rem;
  border-radius: 50px;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast), background var(--transition-normal), box-shadow var(--transition-normal), color var(--transition-normal);
}

.btn-primary {
  background: var(--indigo);
  color: var(--paper);
  border: 2px solid var(--indigo);
}

.btn-primary:hover:not(:disabled) {
  background: var(--indigo-dark);
  transform: translateY(-2px);
  box-shadow: 0 10px 20px rgba(102, 126, 234, 0.3);
}

.btn-primary:disabled {
  opacity: 0.7;
  cursor: not-allowed;
}

.btn-outline {
  background: transparent;
  color: var(--indigo);
  border: 2px solid var(--indigo);
}

.btn-outline:hover {
  background: var(--indigo);
  color: var(--paper);
}

.btn-glass {
  background: rgba(255, 255, 255, 0.15);
  color: var(--paper);
  border: 2px solid rgba(255, 255, 255, 0.4);
  backdrop-filter: blur(10px);
}

.btn-glass:hover {
  background: var(--paper);
  color: var(--indigo);
  transform: translateY(-2px);
}

.btn-ghost {
  background: none;
  border: none;
  color: var(--indigo);
  padding: 0.5rem 0;
}

.btn-ghost:hover {
  color: var(--violet);
}

.social-icon {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  background: rgba(255, 255, 255, 0.15);
  color: var(--paper);
  transition: transform var(--transition-fast), background var(--transition-normal);
}

.social-icon:hover {
  background: rgba(255, 255, 255, 0.3);
  transform: translateY(-3px);
}

/* === Section headers === */
.section-header {
  text-align: center;
  margin-bottom: 4rem;
}

.section-title {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-subtitle {
  font-size: 1.125rem;
  color: var(--text-muted);
  max-width: 600px;
  margin: 0 auto;
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: start;
}

.about-text p {
  color: var(--text-body);
  margin-bottom: 1.25rem;
  font-size: 1.05rem;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  margin: 2rem 0;
}

.stat-tile {
  background: var(--hero-gradient);
  color: var(--paper);
  border-radius: 12px;
  padding: 1.5rem 1rem;
  text-align: center;
}

.stat-value {
  font-size: 2rem;
  font-weight: 800;
}

.stat-label {
  font-size: 0.875rem;
  opacity: 0.9;
}

.timeline-group + .timeline-group {
  margin-top: 3rem;
}

.timeline-heading {
  font-size: 1.5rem;
  margin-bottom: 1.5rem;
}

.timeline {
  position: relative;
  padding-left: 2rem;
  border-left: 2px solid rgba(102, 126, 234, 0.2);
}

.timeline-item {
  position: relative;
  margin-bottom: 2rem;
}

.timeline-dot {
  position: absolute;
  left: calc(-2rem - 7px);
  top: 0.35rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--indigo);
  box-shadow: 0 0 0 4px rgba(102, 126, 234, 0.2);
}

.timeline-year {
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--indigo);
  margin-bottom: 0.25rem;
}

.timeline-item-title {
  font-size: 1.1rem;
  margin-bottom: 0.5rem;
}

.timeline-description {
  color: var(--text-body);
  font-size: 0.95rem;
}

.achievement-highlight {
  display: inline-block;
  margin-top: 0.5rem;
  padding: 0.25rem 0.75rem;
  border-radius: 20px;
  background: rgba(255, 107, 107, 0.1);
  color: var(--coral);
  font-weight: 600;
  font-size: 0.85rem;
}

.timeline-toggle {
  text-align: center;
}

.contribution-graph img {
  max-width: 100%;
  border-radius: 8px;
  box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2);
}

.education {
  margin-top: 5rem;
}

.education .timeline {
  max-width: 800px;
  margin: 0 auto;
}

/* === Projects === */
.category-pills {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 3rem;
}

.pill {
  padding: 0.5rem 1.5rem;
  border-radius: 50px;
  border: 2px solid var(--indigo);
  background: transparent;
  color: var(--indigo);
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.pill:hover,
.pill.selected {
  background: var(--indigo);
  color: var(--paper);
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
  gap: 2rem;
}

.project-card {
  background: var(--paper);
  border-radius: 16px;
  overflow: hidden;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
  display: flex;
  flex-direction: column;
}

.project-card:hover {
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
}

.project-banner {
  height: 180px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
  position: relative;
}

.featured-badge {
  position: absolute;
  top: 1rem;
  right: 1rem;
  padding: 0.25rem 0.75rem;
  border-radius: 20px;
  background: var(--coral);
  color: var(--paper);
  font-size: 0.75rem;
  font-weight: 700;
}

.project-body {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  flex: 1;
}

.project-title {
  font-size: 1.25rem;
  margin-bottom: 0.75rem;
}

.project-description {
  color: var(--text-body);
  font-size: 0.95rem;
  margin-bottom: 1rem;
  flex: 1;
}

.tech-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.25rem;
}

.tech-chip {
  padding: 0.25rem 0.75rem;
  border-radius: 20px;
  background: var(--mist);
  color: var(--indigo);
  font-size: 0.8rem;
  font-weight: 500;
}

.project-link {
  color: var(--indigo);
  font-weight: 600;
}

.project-link:hover {
  color: var(--violet);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  margin-bottom: 4rem;
}

.skill-category {
  background: var(--paper);
  border-radius: 16px;
  padding: 2rem;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
}

.skill-category-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: 1.25rem;
  margin-bottom: 1.5rem;
}

.skill-item {
  margin-bottom: 1.25rem;
}

.skill-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
  font-size: 0.95rem;
}

.skill-level {
  color: var(--indigo);
  font-weight: 600;
}

.skill-bar {
  height: 8px;
  border-radius: 4px;
  background: #e9ecef;
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  border-radius: 4px;
  background: var(--hero-gradient);
}

.additional-skills {
  text-align: center;
}

.additional-skills h3 {
  font-size: 1.5rem;
  margin-bottom: 1.5rem;
}

.skill-cloud {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.skill-tag {
  display: inline-block;
  padding: 0.5rem 1.25rem;
  border-radius: 50px;
  background: var(--paper);
  border: 1px solid rgba(102, 126, 234, 0.3);
  color: var(--text-primary);
  font-size: 0.9rem;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 4rem;
}

.contact-info h3 {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.contact-info p {
  color: var(--text-body);
  margin-bottom: 2rem;
}

.contact-links {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  margin-bottom: 2rem;
}

.contact-link {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.contact-link-icon {
  width: 48px;
  height: 48px;
  border-radius: 12px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  background: var(--hero-gradient);
  color: var(--paper);
}

.contact-link-label {
  font-size: 0.85rem;
  color: var(--text-muted);
}

.contact-link-value {
  color: var(--link-blue);
  font-weight: 500;
}

.contact-form {
  background: var(--paper);
  border-radius: 16px;
  padding: 2.5rem;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

.form-group {
  margin-bottom: 1.25rem;
}

.form-label {
  display: block;
  font-size: 0.9rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.form-input {
  width: 100%;
  padding: 0.875rem 1rem;
  border: 2px solid #e9ecef;
  border-radius: 8px;
  font: inherit;
  transition: border-color var(--transition-normal);
}

.form-input:focus {
  outline: none;
  border-color: var(--indigo);
}

.form-input:disabled {
  background: var(--mist);
}

.form-textarea {
  resize: vertical;
}

.form-banner {
  padding: 1rem;
  border-radius: 8px;
  margin-bottom: 1.25rem;
  font-weight: 500;
}

.form-banner.success {
  background: rgba(40, 167, 69, 0.1);
  color: var(--success);
}

.form-banner.error {
  background: rgba(220, 53, 69, 0.1);
  color: var(--danger);
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
}

.form-submit {
  width: 100%;
  justify-content: center;
}

/* === Footer === */
.footer {
  background: var(--ink);
  color: rgba(255, 255, 255, 0.8);
  padding: 4rem 0 2rem;
}

.footer-top {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 2rem;
}

.footer-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--paper);
}

.footer-social {
  display: flex;
  gap: 1rem;
}

.footer-links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.footer-link {
  background: none;
  border: none;
  font: inherit;
  color: rgba(255, 255, 255, 0.7);
  cursor: pointer;
}

.footer-link:hover {
  color: var(--paper);
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  align-items: center;
  flex-wrap: wrap;
  gap: 1rem;
  border-top: 1px solid rgba(255, 255, 255, 0.1);
  padding-top: 2rem;
  font-size: 0.875rem;
}

.back-to-top {
  text-align: center;
  margin-top: 2rem;
}

.resume-link {
  margin-top: 1.5rem;
  text-align: center;
}

@media (max-width: 900px) {
  .about-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .hero-name {
    font-size: 2.5rem;
  }

  .form-row {
    grid-template-columns: 1fr;
  }
}
"#;
