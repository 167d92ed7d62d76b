pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #0891B2;          /* Club cyan */
  --primary-light: #22D3EE;    /* Lighter cyan for hover states */
  --primary-dark: #0E7490;     /* Darker cyan for active states */
  --accent: #445484;           /* Indigo used by the call-to-action */
  --accent-light: #5A6FA0;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: #EEF4F8;
  --surface: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--neutral-800);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Glass treatments for the floating navbar */
  --glass-bg: rgba(255, 255, 255, 0.55);
  --glass-bg-scrolled: rgba(255, 255, 255, 0.78);
  --glass-bg-open: rgba(255, 255, 255, 0.9);
  --glass-border: rgba(255, 255, 255, 0.45);
  --glass-border-strong: rgba(255, 255, 255, 0.65);

  /* Layout */
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-soft: 1.5rem;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-radius: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
