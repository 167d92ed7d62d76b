use constcat::concat;

mod components;
mod navbar;
mod variables;

pub use components::BASE_COMPONENTS;
pub use navbar::NAVBAR_STYLES;
pub use variables::CSS_VARIABLES;

// Site-wide style bundling
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'PingFang TC', 'Microsoft JhengHei', sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Page scaffolding below the floating navbar */
.page {
  padding-top: 96px;
  min-height: 100vh;
}

.page-header {
  padding: var(--space-8) 0 var(--space-4);
}

.page-intro {
  color: var(--text-secondary);
  max-width: 60ch;
  margin-bottom: var(--space-6);
}

/* Home hero */
.hero {
  padding: var(--space-16) 0 var(--space-10);
  text-align: center;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-3);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
}

/* Feature cards */
.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-4);
  padding-bottom: var(--space-12);
}

.feature-card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
  transition: box-shadow var(--transition-fast) var(--easing-standard);
}

.feature-card:hover {
  box-shadow: var(--shadow-md);
}

.feature-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.feature-desc {
  color: var(--text-secondary);
}

/* Simple content listing used by the section pages */
.entry-list {
  list-style: none;
  display: grid;
  gap: var(--space-3);
  padding-bottom: var(--space-12);
}

.entry-list li {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-4) var(--space-5);
}

.home-footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-secondary);
}
"#
);
