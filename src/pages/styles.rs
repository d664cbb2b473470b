pub const PAGE_STYLES: &str = r#"
    :root {
        --film-black: #050505;
        --celluloid-cream: #F2E8D5;
        --red-carpet: #D91E36;
        --silver-screen: #E0E0E0;
        --charcoal: #1A1A1A;
        --font-display: 'Playfair Display', Georgia, serif;
        --font-mono: 'Courier Prime', 'Courier New', monospace;
        --font-oswald: 'Oswald', 'Arial Narrow', sans-serif;
    }

    body {
        margin: 0;
        background: var(--film-black);
        color: var(--silver-screen);
        -webkit-font-smoothing: antialiased;
        overflow-x: hidden;
    }

    .film {
        position: relative;
        min-height: 100vh;
        font-family: var(--font-mono);
    }

    .film.is-desktop,
    .film.is-desktop a,
    .film.is-desktop button {
        cursor: none;
    }

    /* Cursor */
    #cursor {
        position: fixed;
        top: 0;
        left: 0;
        width: 14px;
        height: 14px;
        margin: -7px 0 0 -7px;
        border-radius: 50%;
        background: var(--red-carpet);
        pointer-events: none;
        z-index: 100;
        mix-blend-mode: difference;
        transition: width 0.3s ease, height 0.3s ease, margin 0.3s ease, background 0.3s ease;
        will-change: transform;
    }

    #cursor::after {
        content: attr(data-text);
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        font-family: var(--font-oswald);
        font-size: 11px;
        letter-spacing: 0.15em;
        color: var(--film-black);
        opacity: 0;
        transition: opacity 0.2s ease;
    }

    #cursor.hovered {
        width: 80px;
        height: 80px;
        margin: -40px 0 0 -40px;
        background: var(--celluloid-cream);
        mix-blend-mode: normal;
    }

    #cursor.hovered::after {
        opacity: 1;
    }

    /* Grain */
    @keyframes grain {
        0%, 100% { transform: translate(0, 0); }
        20% { transform: translate(-5%, 3%); }
        40% { transform: translate(4%, -6%); }
        60% { transform: translate(-3%, 5%); }
        80% { transform: translate(6%, -2%); }
    }

    .film-grain {
        position: fixed;
        inset: -50%;
        width: 200%;
        height: 200%;
        pointer-events: none;
        z-index: 90;
        opacity: 0.07;
        background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='160' height='160'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
        animation: grain 0.8s steps(4) infinite;
    }

    /* Chrome: counter, logo, scrubber */
    .frame-counter {
        position: fixed;
        top: 2.5rem;
        right: 2.5rem;
        z-index: 50;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.875rem;
        color: var(--red-carpet);
        mix-blend-mode: screen;
    }

    .rec-dot {
        display: inline-block;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: var(--red-carpet);
        animation: pulse 2s ease-in-out infinite;
    }

    .frame-number {
        color: #fff;
        font-variant-numeric: tabular-nums;
    }

    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.4; }
    }

    .logo {
        position: fixed;
        top: 2rem;
        left: 2rem;
        z-index: 50;
        mix-blend-mode: difference;
        pointer-events: none;
    }

    .logo h1 {
        margin: 0;
        font-family: var(--font-oswald);
        font-weight: 700;
        font-size: 1.5rem;
        letter-spacing: -0.05em;
        color: #fff;
    }

    .logo span {
        color: var(--red-carpet);
    }

    .scrubber {
        position: fixed;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        width: 80%;
        max-width: 28rem;
        height: 2px;
        background: rgba(255, 255, 255, 0.1);
        border-radius: 9999px;
        z-index: 50;
    }

    .scrubber-fill {
        position: absolute;
        top: 0;
        bottom: 0;
        left: 0;
        width: 0;
        background: var(--red-carpet);
    }

    .scrubber-head {
        position: absolute;
        right: 0;
        top: 50%;
        transform: translate(50%, -50%);
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
        background: var(--celluloid-cream);
        box-shadow: 0 0 10px rgba(217, 30, 54, 0.8);
    }

    /* Pinned strip */
    .wrapper {
        position: relative;
        width: 100%;
    }

    .is-desktop .pin {
        position: sticky;
        top: 0;
        height: 100vh;
        overflow: hidden;
    }

    .is-desktop .track {
        position: relative;
        display: flex;
        width: 600vw;
        height: 100%;
        will-change: transform;
    }

    .is-mobile .track {
        display: flex;
        flex-direction: column;
        width: 100%;
    }

    .sprocket-strip {
        position: absolute;
        left: 0;
        display: flex;
        width: 100%;
        height: 24px;
        overflow: hidden;
        z-index: 30;
        pointer-events: none;
        background: var(--film-black);
    }

    .sprocket-top { top: 0; }
    .sprocket-bottom { bottom: 0; }

    .sprocket-hole {
        flex-shrink: 0;
        width: 36px;
        height: 14px;
        margin: 5px 12px;
        border-radius: 3px;
        background: rgba(242, 232, 213, 0.12);
    }

    .panel {
        position: relative;
        flex-shrink: 0;
        width: 100vw;
        min-height: 100vh;
        height: 100%;
        border-right: 1px solid rgba(255, 255, 255, 0.05);
        box-sizing: border-box;
        overflow: hidden;
    }

    /* Reveal text: hidden until the panel reaches centre, desktop only */
    .is-desktop .reveal-text {
        opacity: 0;
        transform: translateY(var(--reveal-offset, 30px));
        transition: opacity var(--reveal-duration, 1s) ease-out, transform var(--reveal-duration, 1s) ease-out;
        transition-delay: var(--reveal-return-delay, 0ms);
    }

    .is-desktop .panel.revealed .reveal-text {
        opacity: 1;
        transform: translateY(0);
        transition-delay: var(--reveal-delay, 0ms);
    }

    /* Frame 1 */
    .panel-slate {
        display: flex;
        align-items: center;
        justify-content: center;
        background: var(--film-black);
    }

    .slate-center {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        z-index: 10;
    }

    .leader-ring {
        position: relative;
        width: 500px;
        height: 500px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    @keyframes spin {
        to { transform: rotate(360deg); }
    }

    .leader-sweep {
        position: absolute;
        inset: 0;
        border-top: 1px solid var(--red-carpet);
        border-radius: 50%;
        animation: spin 4s linear infinite;
    }

    .leader-cross {
        position: absolute;
        background: rgba(255, 255, 255, 0.05);
    }

    .leader-cross.vertical { width: 1px; height: 100%; }
    .leader-cross.horizontal { width: 100%; height: 1px; }

    .countdown-value {
        margin-top: 1rem;
        font-family: var(--font-oswald);
        font-weight: 700;
        font-size: 16rem;
        line-height: 1;
        color: var(--celluloid-cream);
        font-variant-numeric: tabular-nums;
    }

    .slate-caption {
        position: absolute;
        bottom: 15%;
        padding: 0 1rem;
        text-align: center;
    }

    .production-mode {
        margin-bottom: 1rem;
        font-size: 0.75rem;
        letter-spacing: 0.4em;
        text-transform: uppercase;
        color: var(--red-carpet);
        animation: pulse 2s ease-in-out infinite;
    }

    .slate-caption h2 {
        margin: 0;
        font-family: var(--font-display);
        font-style: italic;
        font-weight: 400;
        font-size: 3.75rem;
        color: rgba(255, 255, 255, 0.9);
    }

    .scroll-hint {
        position: absolute;
        top: 0;
        right: 0;
        height: 100%;
        width: 6rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(to left, rgba(0, 0, 0, 0.8), transparent);
        border-left: 1px solid rgba(255, 255, 255, 0.05);
        z-index: 20;
    }

    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }

    .writing-vertical {
        writing-mode: vertical-rl;
        display: flex;
        align-items: center;
        gap: 1rem;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        color: rgba(255, 255, 255, 0.5);
        animation: bounce 1s infinite;
    }

    .icon {
        width: 1rem;
        height: 1rem;
    }

    /* Frame 2 */
    .panel-hook {
        display: flex;
        align-items: center;
        background: #080808;
    }

    .hook-glow {
        position: absolute;
        inset: 0;
        opacity: 0.2;
        background: radial-gradient(circle at center, #27272a, #000 60%);
    }

    .hook-copy {
        position: relative;
        z-index: 10;
        max-width: 60rem;
        padding: 0 8rem;
    }

    .scene-label {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 2.5rem;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: var(--red-carpet);
    }

    .scene-label.dark {
        display: block;
        margin-bottom: 1rem;
    }

    .scene-rule {
        width: 3rem;
        height: 1px;
        background: var(--red-carpet);
    }

    .panel-hook h2 {
        margin: 0 0 2rem;
        font-family: var(--font-display);
        font-weight: 400;
        font-size: 4.5rem;
        line-height: 1.1;
        color: var(--silver-screen);
    }

    .underlined {
        position: relative;
        display: inline-block;
        font-style: italic;
        color: var(--celluloid-cream);
    }

    .underline {
        position: absolute;
        bottom: -0.5rem;
        left: 0;
        width: 100%;
        height: 0.5rem;
        color: var(--red-carpet);
    }

    .hook-body {
        max-width: 42rem;
        font-size: 1.25rem;
        line-height: 1.6;
        color: #9ca3af;
    }

    .hook-watermark {
        position: absolute;
        right: -10%;
        bottom: -10%;
        opacity: 0.03;
        transform: rotate(-12deg);
        pointer-events: none;
    }

    .clapperboard {
        width: 600px;
        height: 600px;
    }

    /* Frames 3-4 */
    .parallax-img {
        position: absolute;
        top: 0;
        left: -10%;
        width: 120%;
        height: 100%;
        will-change: transform;
    }

    .parallax-img img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: grayscale(1) brightness(0.5) contrast(1.25);
        transition: filter 0.7s ease-out;
    }

    .panel-case:hover .parallax-img img {
        filter: grayscale(0) brightness(0.75) contrast(1.25);
    }

    .case-shade {
        position: absolute;
        inset: 0;
        opacity: 0.9;
        background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.4), transparent);
    }

    .case-body {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
        padding: 0 6rem 8rem;
    }

    .case-lift {
        position: relative;
        z-index: 10;
        transition: transform 0.5s;
    }

    .is-desktop .case-lift {
        transform: translateY(2rem);
    }

    .is-desktop .panel-case:hover .case-lift {
        transform: translateY(0);
    }

    .case-watermark {
        position: absolute;
        top: -10rem;
        left: -2.5rem;
        margin: 0;
        font-family: var(--font-oswald);
        font-size: 12rem;
        line-height: 1;
        color: #fff;
        opacity: 0.03;
        user-select: none;
        pointer-events: none;
    }

    .case-watermark.right {
        left: auto;
        right: 0;
        text-align: right;
    }

    .case-title {
        display: flex;
        align-items: flex-end;
        gap: 1.5rem;
        margin-bottom: 1rem;
    }

    .case-title h2 {
        margin: 0;
        font-family: var(--font-display);
        font-weight: 400;
        font-size: 6rem;
        letter-spacing: -0.025em;
        color: #fff;
    }

    .case-tag {
        margin-bottom: 1.5rem;
        padding: 0.25rem 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.3);
        border-radius: 9999px;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.7);
    }

    .case-quote {
        max-width: 36rem;
        margin-top: 2rem;
    }

    .burned-subtitle {
        display: inline;
        padding: 0.1em 0.3em;
        font-size: 1.125rem;
        font-style: italic;
        line-height: 1.6;
        color: var(--celluloid-cream);
        background: rgba(0, 0, 0, 0.6);
        box-decoration-break: clone;
        -webkit-box-decoration-break: clone;
    }

    .case-actions {
        display: flex;
        gap: 1rem;
        margin-top: 3rem;
    }

    .watch-cut {
        padding: 0.75rem 2rem;
        border: none;
        background: var(--red-carpet);
        color: #fff;
        font-family: var(--font-oswald);
        font-weight: 700;
        font-size: 0.875rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        transition: background 0.3s, color 0.3s;
    }

    .watch-cut:hover {
        background: #fff;
        color: #000;
    }

    /* Frame 5 */
    .panel-pipeline {
        display: flex;
        align-items: center;
        background: var(--silver-screen);
        color: var(--film-black);
    }

    .pipeline-grid {
        position: relative;
        z-index: 10;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        width: 100%;
        padding: 0 8rem;
        box-sizing: border-box;
    }

    .pipeline-title {
        margin: 0 0 3rem;
        font-family: var(--font-oswald);
        font-size: 4.5rem;
        text-transform: uppercase;
        letter-spacing: -0.05em;
        color: #000;
    }

    .pipeline-steps {
        margin: 0;
        padding: 0;
        list-style: none;
        font-family: var(--font-display);
        font-size: 2.25rem;
    }

    .pipeline-step {
        display: flex;
        align-items: baseline;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }

    .step-number {
        font-family: var(--font-mono);
        font-size: 0.875rem;
        color: var(--red-carpet);
    }

    .step-label {
        border-bottom: 2px solid rgba(0, 0, 0, 0.1);
        transition: border-color 0.3s, transform 0.3s;
    }

    .pipeline-step:hover .step-label {
        border-color: var(--red-carpet);
        transform: translateX(0.5rem);
    }

    .script-page {
        display: flex;
        flex-direction: column;
        justify-content: center;
        height: fit-content;
        padding: 2rem 0 2rem 3rem;
        border-left: 2px solid rgba(0, 0, 0, 0.05);
        border-radius: 0 0.5rem 0.5rem 0;
        background: rgba(255, 255, 255, 0.5);
        backdrop-filter: blur(4px);
        font-size: 0.875rem;
    }

    .script-page p { margin: 0 0 1rem; }
    .script-file { font-weight: 700; color: #9ca3af; }
    .script-slug { letter-spacing: 0.025em; }
    .script-action { max-width: 24rem; }
    .script-note { color: #6b7280; }
    .script-cut { margin-top: 1rem; font-weight: 700; letter-spacing: 0.1em; color: var(--red-carpet); }

    /* Frame 6 */
    .panel-finale {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        background: var(--film-black);
    }

    @keyframes scrollY {
        0% { transform: translateY(0); }
        100% { transform: translateY(-100%); }
    }

    .credits-roll {
        position: absolute;
        inset: 0;
        overflow: hidden;
        opacity: 0.1;
        pointer-events: none;
    }

    .credits-track {
        padding-top: 100vh;
        font-family: var(--font-oswald);
        font-size: 2.25rem;
        color: #fff;
        animation: scrollY 20s linear infinite;
    }

    .credits-track p { margin: 0 0 6rem; }

    .finale-copy {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        padding: 0 2rem;
    }

    .finale-copy h2 {
        margin: 0 0 2rem;
        font-family: var(--font-display);
        font-weight: 400;
        font-size: 8rem;
        letter-spacing: -0.025em;
        color: #fff;
    }

    .finale-tagline {
        max-width: 32rem;
        margin: 0 auto 3rem;
        font-size: 1.25rem;
        color: var(--silver-screen);
    }

    .start-project {
        position: relative;
        display: inline-block;
        padding: 2rem 4rem;
        overflow: hidden;
        border: 1px solid rgba(255, 255, 255, 0.2);
        text-decoration: none;
    }

    .start-project-fill {
        position: absolute;
        inset: 0;
        background: var(--red-carpet);
        transition: background 0.3s ease-out;
    }

    .start-project span {
        position: relative;
        z-index: 10;
        font-family: var(--font-oswald);
        font-size: 1.875rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: #fff;
        transition: color 0.3s;
    }

    .start-project:hover .start-project-fill { background: #fff; }
    .start-project:hover span { color: #000; }

    .contact-credits {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        margin-top: 6rem;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #6b7280;
    }

    .contact-credit { transition: color 0.3s; }
    .contact-credit:hover { color: #fff; }

    .contact-credit span {
        display: block;
        margin-bottom: 0.5rem;
        color: var(--red-carpet);
    }

    .copyright {
        position: absolute;
        bottom: 5rem;
        font-size: 10px;
        color: #374151;
    }

    /* Mobile stack */
    @media (max-width: 767px) {
        .logo { top: 1.5rem; left: 1.5rem; }
        .logo h1 { font-size: 1.25rem; }

        .leader-ring { width: 280px; height: 280px; }
        .countdown-value { font-size: 8rem; }
        .slate-caption h2 { font-size: 1.875rem; }
        .production-mode { font-size: 10px; }
        .scroll-hint { width: 3rem; }
        .writing-vertical { font-size: 10px; }

        .hook-copy { padding: 6rem 1.5rem; }
        .scene-label { margin-bottom: 1.5rem; }
        .panel-hook h2 { font-size: 2.25rem; }
        .hook-body { font-size: 0.875rem; }

        .case-body { padding: 0 1.5rem 6rem; }
        .case-watermark { display: none; }
        .case-title { flex-direction: column; align-items: flex-start; gap: 0.5rem; }
        .case-title h2 { font-size: 3rem; }
        .case-tag { margin-bottom: 0.5rem; font-size: 10px; }
        .case-quote { margin-top: 1rem; }
        .burned-subtitle { font-size: 0.875rem; }
        .case-actions { margin-top: 2rem; }

        .pipeline-grid { grid-template-columns: 1fr; padding: 6rem 1.5rem; }
        .pipeline-title { font-size: 2.25rem; margin-bottom: 2rem; }
        .pipeline-steps { font-size: 1.5rem; }
        .pipeline-step { margin-bottom: 1rem; }
        .script-page { display: none; }

        .finale-copy h2 { font-size: 3rem; margin-bottom: 1.5rem; }
        .finale-tagline { font-size: 0.875rem; }
        .start-project { padding: 1.5rem 3rem; }
        .start-project span { font-size: 1.25rem; }
        .contact-credits { grid-template-columns: 1fr; margin-top: 4rem; font-size: 10px; }
        .copyright { bottom: 4rem; }
    }
"#;
