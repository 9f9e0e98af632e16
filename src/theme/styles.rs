//! Global CSS styles for the portfolio.
//!
//! Dark glass aesthetic with a teal accent. Entrance, marquee, particle and
//! caret animations are keyframes here; per-element timing is set inline
//! by the components.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --background: hsl(222 47% 6%);
  --surface: hsla(222 40% 14% / 0.55);
  --border: hsla(210 40% 96% / 0.08);

  /* Accent */
  --primary: hsl(174 60% 45%);
  --primary-glow: hsla(174 60% 45% / 0.35);
  --secondary: hsl(199 89% 48%);

  /* Text */
  --text: hsl(210 40% 96%);
  --text-muted: hsl(215 20% 65%);

  /* Code card */
  --code-keyword: hsl(286 60% 70%);
  --code-string: hsl(95 38% 62%);
  --code-literal: hsl(29 54% 61%);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.22, 1, 0.36, 1);
  --ease-out-expo: cubic-bezier(0.22, 1, 0.36, 1);

  --radius: 1rem;
  --nav-height: 4rem;
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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--text);
  line-height: 1.7;
  min-height: 100vh;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

/* === Utilities === */
.glass {
  background: var(--surface);
  border: 1px solid var(--border);
  backdrop-filter: blur(16px);
  -webkit-backdrop-filter: blur(16px);
}

.glow {
  box-shadow: 0 0 40px var(--primary-glow);
}

.text-gradient {
  background: linear-gradient(135deg, var(--primary), var(--secondary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.accent {
  color: var(--primary);
}

.muted {
  color: var(--text-muted);
}

.body-text {
  color: var(--text-muted);
  font-size: var(--text-base);
  margin-bottom: 1rem;
}

.icon {
  flex-shrink: 0;
}

/* === Entrance Animations === */
.enter-scale {
  animation: enter-scale 0.8s var(--ease-out-expo) both;
}

.enter-rise {
  animation: enter-rise 0.8s ease-out both;
}

.hero-badge.enter-scale { animation-delay: 0s; }
.hero-photo.enter-scale { animation-delay: 0.15s; }
.hero-title.enter-rise { animation-delay: 0.3s; }
.hero-headline.enter-rise { animation-delay: 0.45s; }
.hero-role.enter-rise { animation-delay: 0.6s; }
.hero-actions.enter-rise { animation-delay: 0.75s; }

@keyframes enter-scale {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes enter-rise {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes nav-drop {
  from { transform: translateY(-100%); }
  to { transform: translateY(0); }
}

/* === Scroll Progress === */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 3px;
  z-index: 60;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  transform-origin: 0 50%;
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 50;
  border-width: 0 0 1px 0;
  animation: nav-drop 0.6s ease-out both;
}

.nav-inner {
  max-width: 72rem;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-family: var(--font-mono);
  font-size: var(--text-lg);
  font-weight: 700;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  position: relative;
  font-size: var(--text-sm);
  color: var(--text-muted);
  transition: color var(--transition-normal);
}

.nav-link:hover {
  color: var(--primary);
}

.nav-underline {
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--primary);
  transition: width var(--transition-normal);
}

.nav-link:hover .nav-underline {
  width: 100%;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  padding: calc(var(--nav-height) + 2rem) 1.5rem 4rem;
  background: radial-gradient(ellipse at top, hsla(174 60% 45% / 0.12), transparent 60%);
}

.hero-content {
  position: relative;
  z-index: 2;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  text-align: center;
  max-width: 48rem;
}

.hero-photo {
  width: 10rem;
  height: 10rem;
  border-radius: 50%;
  object-fit: cover;
  border: 3px solid var(--primary);
  box-shadow: 0 0 40px var(--primary-glow);
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  line-height: 1.1;
}

.hero-headline {
  font-family: var(--font-mono);
  font-size: var(--text-xl);
  min-height: 2.5rem;
}

.hero-role {
  color: var(--text-muted);
  font-size: var(--text-lg);
}

.hero-role-prefix {
  margin-right: 0.25rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 1rem;
}

.hero-scroll-cue {
  position: absolute;
  bottom: -6rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--text-muted);
  animation: bob 2s ease-in-out infinite;
}

@keyframes bob {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 10px); }
}

/* === Particles === */
.particle-field {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.particle {
  position: absolute;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  background: var(--primary);
  opacity: 0;
}

@keyframes particle-float {
  0% { opacity: 0; transform: translateY(0); }
  15% { opacity: 0.8; }
  85% { opacity: 0.8; }
  100% { opacity: 0; transform: translateY(var(--drift)); }
}

/* === Dot Grid === */
.dot-grid {
  position: absolute;
  inset: -30% 0;
  pointer-events: none;
  z-index: 1;
}

.dot-grid-pattern {
  width: 100%;
  height: 100%;
  background-image: radial-gradient(circle, var(--primary) 1px, transparent 1px);
}

/* === Status Badge === */
.status-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.35rem 0.9rem;
  border-radius: 999px;
  font-size: var(--text-sm);
  color: var(--primary);
}

.status-badge .pulse {
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

/* === Typing / Rotating Text === */
.typing-caret {
  color: var(--primary);
  margin-left: 2px;
  animation: caret-blink 1s step-end infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

.rotating-text {
  display: inline-block;
  color: var(--primary);
  font-weight: 600;
}

.rotating-label {
  display: inline-block;
  animation: rotate-in 0.4s ease-out both;
}

@keyframes rotate-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Buttons === */
.btn-primary,
.btn-glass,
.btn-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 0.75rem;
  font-weight: 600;
  cursor: pointer;
  transition:
    transform var(--transition-fast),
    box-shadow var(--transition-normal),
    background var(--transition-normal);
}

.btn-primary {
  padding: 0.75rem 1.75rem;
  background: var(--primary);
  color: var(--background);
}

.btn-primary:hover {
  transform: translateY(-2px);
  box-shadow: 0 0 30px var(--primary-glow);
}

.btn-glass {
  padding: 0.75rem 1.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  backdrop-filter: blur(16px);
}

.btn-glass:hover {
  border-color: var(--primary);
  transform: translateY(-2px);
}

.btn-icon {
  width: 3rem;
  height: 3rem;
  background: var(--surface);
  border: 1px solid var(--border);
}

.btn-icon:hover {
  color: var(--primary);
  border-color: var(--primary);
  transform: scale(1.1);
}

/* === Sections === */
.page-section {
  max-width: 72rem;
  margin: 0 auto;
  padding: 6rem 1.5rem;
  scroll-margin-top: var(--nav-height);
}

.section-heading {
  margin-bottom: 3rem;
}

.section-heading.centered {
  text-align: center;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 800;
}

.accent-bar {
  width: 4rem;
  height: 4px;
  margin-top: 0.75rem;
  border-radius: 2px;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
}

.section-heading.centered .accent-bar {
  margin-left: auto;
  margin-right: auto;
}

.section-subtitle {
  margin-top: 1rem;
  color: var(--text-muted);
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.stat-row {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  margin-top: 2rem;
}

.stat-card {
  padding: 1.25rem;
  border-radius: var(--radius);
  text-align: center;
}

.stat-icon {
  display: inline-flex;
  color: var(--primary);
}

.stat-value {
  font-size: var(--text-xl);
  font-weight: 800;
}

.stat-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.code-card {
  border-radius: var(--radius);
  overflow: hidden;
}

.code-card-bar {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--border);
}

.window-dot {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
}

.window-dot.red { background: #ff5f56; }
.window-dot.yellow { background: #ffbd2e; }
.window-dot.green { background: #27c93f; }

.code-card-file {
  margin-left: 0.5rem;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.code-card-body {
  padding: 1.5rem;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  line-height: 1.8;
  overflow-x: auto;
}

.code-keyword { color: var(--code-keyword); }
.code-ident { color: var(--secondary); }
.code-key { color: var(--primary); }
.code-string { color: var(--code-string); }
.code-literal { color: var(--code-literal); }

/* === Skills === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1.25rem;
}

.skill-card {
  padding: 1.25rem;
  border-radius: var(--radius);
  transition: border-color var(--transition-normal), transform var(--transition-normal);
}

.skill-card:hover {
  border-color: var(--primary);
}

.skill-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.skill-icon {
  display: inline-flex;
  color: var(--primary);
}

.skill-name {
  flex: 1;
  font-weight: 600;
}

.skill-level {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.skill-track {
  height: 6px;
  margin-top: 0.9rem;
  border-radius: 3px;
  background: var(--border);
  overflow: hidden;
}

.skill-fill {
  height: 100%;
  border-radius: 3px;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
}

/* === Marquee === */
.marquee {
  margin-top: 3rem;
  overflow: hidden;
  mask-image: linear-gradient(90deg, transparent, #000 10%, #000 90%, transparent);
  -webkit-mask-image: linear-gradient(90deg, transparent, #000 10%, #000 90%, transparent);
}

.marquee-track {
  display: flex;
  gap: 1rem;
  width: max-content;
}

.marquee:hover .marquee-track {
  animation-play-state: paused;
}

.marquee-item {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.6rem 1.2rem;
  border-radius: 999px;
  white-space: nowrap;
  font-size: var(--text-sm);
}

@keyframes marquee {
  from { transform: translateX(0); }
  to { transform: translateX(-50%); }
}

/* === Projects === */
.project-grid,
.cert-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
}

.project-slot,
.cert-slot {
  height: 100%;
}

.project-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  height: 100%;
  padding: 1.5rem;
  border-radius: var(--radius);
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.project-card:hover,
.cert-card:hover {
  transform: translateY(-8px);
  border-color: var(--primary);
}

.card-icons {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 700;
}

.card-body {
  flex: 1;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
}

.tech-tag {
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--primary);
  background: hsla(174 60% 45% / 0.12);
}

/* === Certifications === */
.cert-card {
  display: flex;
  flex-direction: column;
  height: 100%;
  border-radius: var(--radius);
  overflow: hidden;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.cert-image {
  aspect-ratio: 16 / 10;
  overflow: hidden;
}

.cert-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow);
}

.cert-card:hover .cert-image img {
  transform: scale(1.05);
}

.cert-body {
  padding: 1.25rem;
}

.cert-issuer {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

/* === Contact === */
.contact {
  max-width: 40rem;
  margin: 0 auto;
}

.contact-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  padding: 3rem 2rem;
  border-radius: var(--radius);
}

.social-row {
  display: flex;
  gap: 1rem;
}

/* === Footer === */
.footer {
  padding: 2rem 1.5rem;
  border-top: 1px solid var(--border);
  text-align: center;
}

.footer-text {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Not Found === */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  text-align: center;
  padding: 2rem;
}

.not-found-code {
  font-size: 6rem;
  font-weight: 800;
  line-height: 1;
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-links {
    gap: 1rem;
    overflow-x: auto;
  }

  .nav-link {
    font-size: var(--text-xs);
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .hero-photo {
    width: 7.5rem;
    height: 7.5rem;
  }

  .about-grid {
    grid-template-columns: 1fr;
  }

  .page-section {
    padding: 4rem 1rem;
  }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }

  html {
    scroll-behavior: auto;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// Seconds from the `animation-delay` rule for `selector`
    fn entrance_delay(selector: &str) -> f32 {
        let rule = format!("{} {{ animation-delay: ", selector);
        let start = GLOBAL_STYLES
            .find(&rule)
            .unwrap_or_else(|| panic!("no delay rule for {selector}"))
            + rule.len();
        let rest = &GLOBAL_STYLES[start..];
        let end = rest.find('s').expect("delay in seconds");
        rest[..end].parse().expect("numeric delay")
    }

    #[test]
    fn hero_enters_top_to_bottom() {
        let order = [
            ".hero-badge.enter-scale",
            ".hero-photo.enter-scale",
            ".hero-title.enter-rise",
            ".hero-headline.enter-rise",
            ".hero-role.enter-rise",
            ".hero-actions.enter-rise",
        ];
        let delays: Vec<f32> = order.iter().map(|s| entrance_delay(s)).collect();
        assert_eq!(delays[0], 0.0);
        assert!(delays.windows(2).all(|w| w[0] < w[1]), "{delays:?}");
    }

    #[test]
    fn entrance_animations_carry_no_hidden_delay() {
        for rule in ["animation: enter-scale", "animation: enter-rise"] {
            let start = GLOBAL_STYLES.find(rule).expect("entrance rule");
            let line = GLOBAL_STYLES[start..].lines().next().unwrap_or_default();
            assert!(!line.contains("var(--transition-"), "{line}");
        }
    }
}
