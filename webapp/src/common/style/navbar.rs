pub const NAVBAR_STYLES: &str = r#"
/* Floating glass navbar.
 *
 * Both layout variants are always in the DOM; this media query alone
 * decides which one is visible. */
.navbar-mobile { display: block; }
.navbar-desktop { display: none; }

@media (min-width: 768px) {
  .navbar-mobile { display: none; }
  .navbar-desktop { display: block; }
}

.navbar-shell {
  position: fixed;
  top: var(--space-3);
  left: 50%;
  transform: translateX(-50%);
  width: calc(100% - 3rem);
  z-index: 50;
  overflow: hidden;
  font-weight: 700;
  transition: border-radius var(--transition-radius) var(--easing-standard);
}

.navbar-shell-desktop {
  top: var(--space-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-3) var(--space-5);
}

.navbar-rounded-full { border-radius: var(--radius-full); }
.navbar-rounded-soft { border-radius: var(--radius-soft); }

.navbar-glass {
  background: var(--glass-bg);
  backdrop-filter: blur(14px);
  -webkit-backdrop-filter: blur(14px);
  border: 1px solid var(--glass-border);
  box-shadow: var(--shadow-sm);
}

.navbar-glass-scrolled {
  background: var(--glass-bg-scrolled);
  backdrop-filter: blur(18px);
  -webkit-backdrop-filter: blur(18px);
  border: 1px solid var(--glass-border-strong);
  box-shadow: var(--shadow-md);
}

.navbar-glass-mobile-open {
  background: var(--glass-bg-open);
  backdrop-filter: blur(20px);
  -webkit-backdrop-filter: blur(20px);
  border: 1px solid var(--glass-border-strong);
  box-shadow: var(--shadow-lg);
}

.navbar-row {
  display: flex;
  justify-content: space-between;
  padding: var(--space-3) var(--space-5);
  width: 100%;
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  text-decoration: none;
}

.navbar-brand:hover { text-decoration: none; }

.navbar-logo-chip {
  width: 36px;
  height: 36px;
  border-radius: var(--radius-full);
  background: rgba(255, 255, 255, 0.3);
  border: 1px solid rgba(255, 255, 255, 0.55);
  box-shadow: inset 0 1px 2px rgba(255, 255, 255, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background-color var(--transition-radius) var(--easing-standard);
}

.navbar-brand:hover .navbar-logo-chip {
  background: rgba(255, 255, 255, 0.5);
}

.navbar-logo {
  width: 24px;
  height: 24px;
}

.navbar-wordmark {
  color: var(--text-primary);
  font-weight: 600;
  font-size: 1.5rem;
  letter-spacing: -0.01em;
}

.navbar-toggle {
  align-self: center;
  background: rgba(255, 255, 255, 0.25);
  border: 1px solid rgba(255, 255, 255, 0.45);
  border-radius: var(--radius-full);
  padding: var(--space-2);
  cursor: pointer;
  box-shadow: var(--shadow-sm);
  transition: background-color var(--transition-radius) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.navbar-toggle:hover { background: rgba(255, 255, 255, 0.45); }
.navbar-toggle:active { transform: scale(0.9); }

.navbar-toggle-icon {
  width: 24px;
  height: 24px;
  display: block;
  color: var(--neutral-700);
}

.navbar-dropdown {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  animation: menu-enter var(--transition-normal) var(--easing-standard);
}

@keyframes menu-enter {
  from { opacity: 0; transform: translateY(-4px); }
  to { opacity: 1; transform: none; }
}

.navbar-dropdown-list {
  list-style: none;
  margin-bottom: var(--space-3);
}

.navbar-dropdown-item {
  margin: 2px var(--space-1);
}

.navbar-dropdown-link {
  display: flex;
  align-items: center;
  color: var(--neutral-700);
  font-weight: 500;
  font-size: 1.125rem;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid transparent;
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.navbar-dropdown-link:hover {
  color: var(--primary-dark);
  background: rgba(255, 255, 255, 0.45);
  border-color: rgba(255, 255, 255, 0.4);
  text-decoration: none;
}

.navbar-links {
  display: flex;
  flex: 1;
  align-items: center;
  gap: var(--space-1);
  padding: 0 var(--space-8);
  list-style: none;
  text-align: center;
}

.navbar-link-item { flex: 1; }

.navbar-link {
  display: inline-flex;
  width: 100%;
  align-items: center;
  justify-content: center;
  gap: 6px;
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--neutral-700);
  padding: var(--space-2);
  border-radius: var(--radius-full);
  border: 1px solid transparent;
  transition: color var(--transition-radius) var(--easing-standard),
              background-color var(--transition-radius) var(--easing-standard);
}

.navbar-link:hover {
  color: var(--primary-dark);
  background: rgba(255, 255, 255, 0.45);
  border-color: rgba(255, 255, 255, 0.5);
  text-decoration: none;
}

.navbar-link-icon {
  width: 18px;
  height: 18px;
}

/* Call to action */
.join-us-btn {
  position: relative;
  overflow: hidden;
  width: fit-content;
  color: var(--text-inverse);
  font-size: 1rem;
  font-weight: 600;
  padding: var(--space-2) var(--space-10);
  border-radius: var(--radius-full);
  border: 1px solid rgba(255, 255, 255, 0.25);
  background: linear-gradient(to bottom, var(--accent-light), var(--accent));
  box-shadow: inset 0 1px 0 rgba(255, 255, 255, 0.28),
              0 4px 14px rgba(68, 84, 132, 0.45);
  cursor: pointer;
  transition: box-shadow var(--transition-radius) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.join-us-btn:hover {
  box-shadow: inset 0 1px 0 rgba(255, 255, 255, 0.38),
              0 6px 20px rgba(68, 84, 132, 0.6);
}

.join-us-btn:active { transform: scale(0.95); }

.join-us-btn-block { width: 100%; }
"#;
