use chrono::Datelike;
use yew::prelude::*;

use crate::components::ai_strategist::AiStrategist;
use crate::components::ticker::TrendTicker;
use crate::models::{FaqItem, ProcessStep, Project, Service, Stat, TeamMember, Testimonial};

const STATS: &[Stat] = &[
    Stat { index: "01", label: "Market Cap Secured", value: "1.8B+" },
    Stat { index: "02", label: "Core Deployments", value: "120+" },
    Stat { index: "03", label: "Uptime Reliability", value: "100%" },
];

const SERVICES: &[Service] = &[
    Service {
        id: "protocol",
        title: "Protocol Engineering",
        description: "Smart contract systems, audits-ready architecture and upgrade paths that survive mainnet.",
        icon: "⬡",
    },
    Service {
        id: "interface",
        title: "Interface Design",
        description: "Wallet flows and DeFi dashboards that feel as fast as the chains underneath them.",
        icon: "◐",
    },
    Service {
        id: "brand",
        title: "On-chain Brand",
        description: "Identity systems, launch narratives and NFT drops built for communities, not campaigns.",
        icon: "✦",
    },
    Service {
        id: "growth",
        title: "Token Strategy",
        description: "Tokenomics modelling, liquidity planning and governance design from day zero.",
        icon: "△",
    },
];

const PROJECTS: &[Project] = &[
    Project {
        name: "Helix Bridge",
        category: "Infrastructure",
        summary: "Cross-rollup bridge with optimistic settlement and a one-click user flow.",
        metric: "$420M bridged",
    },
    Project {
        name: "Aurum Vaults",
        category: "DeFi",
        summary: "Auto-compounding yield vaults with a risk dashboard traders actually read.",
        metric: "38K depositors",
    },
    Project {
        name: "Nocturne Pass",
        category: "Membership",
        summary: "Token-gated membership platform with soulbound credentials.",
        metric: "12K holders",
    },
];

const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Discovery Node",
        description: "We map your market, your chain constraints and the one metric that matters.",
    },
    ProcessStep {
        number: "02",
        title: "Architecture",
        description: "Contracts, data flows and interfaces specified before a line ships.",
    },
    ProcessStep {
        number: "03",
        title: "Build & Audit",
        description: "Two-week sprints, public testnets and third-party audits baked into the plan.",
    },
    ProcessStep {
        number: "04",
        title: "Launch & Scale",
        description: "Mainnet launch, liquidity bootstrapping and post-launch monitoring.",
    },
];

const TEAM: &[TeamMember] = &[
    TeamMember { name: "Mara Quill", role: "Founder / Strategy", handle: "@maraquill" },
    TeamMember { name: "Dev Okafor", role: "Protocol Lead", handle: "@devokafor" },
    TeamMember { name: "Sun Hae", role: "Design Director", handle: "@sunhae" },
    TeamMember { name: "Ilya Brandt", role: "Security", handle: "@ibrandt" },
];

const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Which chains do you build on?",
        answer: "Ethereum and its major rollups, Solana and Cosmos app-chains. We pick the chain that fits your users, not ours.",
    },
    FaqItem {
        question: "Do you handle smart contract audits?",
        answer: "We write audit-ready code and coordinate independent audits with partner firms before every mainnet release.",
    },
    FaqItem {
        question: "How long does a typical engagement take?",
        answer: "A focused launch runs eight to twelve weeks. Protocol builds are scoped in phases after discovery.",
    },
    FaqItem {
        question: "Can you work with our in-house team?",
        answer: "Yes. Most of our engagements are embedded, with shared repositories and weekly demos.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They shipped our vault interface in six weeks and TVL tripled the month after.",
        author: "Lena Hart",
        company: "Aurum Finance",
    },
    Testimonial {
        quote: "The only studio that understood both our bridge contracts and our brand.",
        author: "Tomas Reyes",
        company: "Helix Labs",
    },
];

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #000;
        color: #fff;
        overflow-x: hidden;
        font-family: "Inter", -apple-system, BlinkMacSystemFont, sans-serif;
    }
    .landing-page section {
        padding: 6rem 1.5rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .accent { color: #9333ea; }
    .section-kicker {
        display: block;
        margin-bottom: 1rem;
        color: #a855f7;
        font-size: 0.65rem;
        font-weight: 700;
        letter-spacing: 0.4em;
    }
    .landing-page h2 {
        font-size: clamp(2.2rem, 6vw, 5rem);
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: -0.03em;
        line-height: 1;
        margin-bottom: 3rem;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 8rem 1.5rem 4rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .hero h1 {
        font-size: clamp(3rem, 11vw, 10rem);
        font-weight: 900;
        line-height: 0.85;
        letter-spacing: -0.05em;
        text-transform: uppercase;
    }
    .hero p {
        max-width: 36rem;
        margin: 2rem 0 3rem;
        color: #9ca3af;
        font-size: 1.15rem;
        line-height: 1.7;
    }
    .hero-cta, .contact-cta, .strategist-input button {
        display: inline-block;
        padding: 1.25rem 3rem;
        background: #fff;
        color: #000;
        border: none;
        font-size: 0.65rem;
        font-weight: 700;
        letter-spacing: 0.5em;
        text-transform: uppercase;
        text-decoration: none;
        transition: background 0.7s, color 0.7s;
    }
    .hero-cta:hover, .contact-cta:hover, .strategist-input button:hover {
        background: #9333ea;
        color: #fff;
    }
    .stats-strip {
        padding: 3rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        overflow: hidden;
    }
    .stats-track {
        display: flex;
        gap: 6rem;
        white-space: nowrap;
        animation: marquee 45s linear infinite;
    }
    .stat { display: flex; align-items: center; gap: 0.75rem; }
    .stat-index {
        font-size: clamp(3.5rem, 8vw, 6rem);
        font-weight: 900;
        color: transparent;
        -webkit-text-stroke: 1px rgba(255, 255, 255, 0.1);
        line-height: 1;
    }
    .stat-label {
        display: block;
        color: #a855f7;
        font-size: 0.6rem;
        font-weight: 700;
        letter-spacing: 0.3em;
        text-transform: uppercase;
    }
    .stat-value { font-size: 2rem; font-weight: 700; }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1px;
        background: rgba(255, 255, 255, 0.08);
    }
    .card {
        background: #000;
        padding: 2.5rem 2rem;
        transition: background 0.5s;
    }
    .card:hover { background: #0b0710; }
    .card h3 { font-size: 1.25rem; margin: 1rem 0; text-transform: uppercase; }
    .card p { color: #9ca3af; line-height: 1.6; }
    .card-icon { font-size: 2rem; color: #a855f7; }
    .card-meta {
        color: #a855f7;
        font-size: 0.65rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
    }
    .faq-item { border-bottom: 1px solid rgba(255, 255, 255, 0.08); }
    .faq-question {
        width: 100%;
        padding: 1.5rem 0;
        background: none;
        border: none;
        color: #fff;
        display: flex;
        justify-content: space-between;
        font-size: 1.1rem;
        text-align: left;
    }
    .faq-answer { padding-bottom: 1.5rem; color: #9ca3af; line-height: 1.7; }
    .testimonial blockquote { font-size: 1.4rem; line-height: 1.5; margin-bottom: 1.5rem; }
    .strategist-log {
        min-height: 240px;
        max-height: 420px;
        overflow-y: auto;
        border: 1px solid rgba(255, 255, 255, 0.08);
        padding: 1.5rem;
        margin-bottom: 1rem;
    }
    .chat-message { margin-bottom: 1.25rem; line-height: 1.6; }
    .chat-message.from-user { color: #a855f7; text-align: right; }
    .chat-sources { margin-top: 0.5rem; font-size: 0.8rem; }
    .chat-sources a { color: #9ca3af; }
    .strategist-greeting, .strategist-thinking { color: #6b7280; letter-spacing: 0.1em; }
    .strategist-input { display: flex; gap: 0.5rem; }
    .strategist-input input {
        flex: 1;
        padding: 1rem;
        background: #0a0a0a;
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: #fff;
    }
    .contact {
        min-height: 70vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .contact p { max-width: 36rem; color: #6b7280; margin-bottom: 3rem; line-height: 1.7; }
    .site-footer {
        padding: 3rem 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        color: #4b5563;
        font-size: 0.7rem;
        letter-spacing: 0.3em;
        text-align: center;
    }
    @keyframes marquee {
        0% { transform: translateX(0); }
        100% { transform: translateX(-50%); }
    }
    @media (max-width: 768px) {
        .landing-page section { padding: 4rem 1.25rem; }
        .stats-track { gap: 3rem; }
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <header class="hero">
                <span class="section-kicker">{"DECENTRALISED PRODUCT STUDIO"}</span>
                <h1>{"Forge the "}<span class="accent">{"next"}</span><br/>{"protocol"}</h1>
                <p>
                    {"We architect, design and ship web3 products for teams that refuse to look like everyone else on-chain."}
                </p>
                <div>
                    { call_to_action("#contact", "hero-cta") }
                </div>
            </header>

            <TrendTicker />
            <StatsMarquee />
            <Services />
            <Projects />
            <Process />
            <AiStrategist />
            <Team />
            <Faq />
            <Testimonials />

            <section class="contact" id="contact">
                <h2>{"Join the "}<span class="accent">{"network"}</span></h2>
                <p>
                    {"Ready to architect your digital legacy? Our strategy leads are waiting to initialize your project nodes."}
                </p>
                { call_to_action("mailto:hello@nodeforge.studio", "contact-cta") }
            </section>

            <Footer />
        </div>
    }
}

/// A single link styled as a button, so the ring sees one hover target.
fn call_to_action(href: &'static str, class: &'static str) -> Html {
    html! {
        <a {href} class={classes!(class, "cursor-grow")}>
            {"Initialize Project_"}
        </a>
    }
}

#[function_component(StatsMarquee)]
fn stats_marquee() -> Html {
    html! {
        <div class="stats-strip">
            <div class="stats-track">
                { for (0..3).flat_map(|_| STATS.iter()).enumerate().map(|(i, stat)| html! {
                    <div class="stat" key={i}>
                        <span class="stat-index">{ stat.index }</span>
                        <div>
                            <span class="stat-label">{ stat.label }</span>
                            <span class="stat-value">{ stat.value }</span>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services">
            <span class="section-kicker">{"01 / CAPABILITIES"}</span>
            <h2>{"What we "}<span class="accent">{"build"}</span></h2>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="card group" key={service.id}>
                        <span class="card-icon">{ service.icon }</span>
                        <h3>{ service.title }</h3>
                        <p>{ service.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id="work">
            <span class="section-kicker">{"02 / SELECTED WORK"}</span>
            <h2>{"Deployed "}<span class="accent">{"nodes"}</span></h2>
            <div class="card-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <div class="card group" key={project.name}>
                        <span class="card-meta">{ project.category }</span>
                        <h3>{ project.name }</h3>
                        <p>{ project.summary }</p>
                        <span class="card-meta">{ project.metric }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section id="process">
            <span class="section-kicker">{"03 / PROCESS"}</span>
            <h2>{"From block "}<span class="accent">{"zero"}</span></h2>
            <div class="card-grid">
                { for PROCESS.iter().map(|step| html! {
                    <div class="card" key={step.number}>
                        <span class="stat-index">{ step.number }</span>
                        <h3>{ step.title }</h3>
                        <p>{ step.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Team)]
fn team() -> Html {
    html! {
        <section id="team">
            <span class="section-kicker">{"05 / OPERATORS"}</span>
            <h2>{"The "}<span class="accent">{"core"}</span>{" team"}</h2>
            <div class="card-grid">
                { for TEAM.iter().map(|member| html! {
                    <div class="card group" key={member.handle}>
                        <h3>{ member.name }</h3>
                        <p>{ member.role }</p>
                        <span class="card-meta">{ member.handle }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq">
            <span class="section-kicker">{"06 / FAQ"}</span>
            <h2>{"Open "}<span class="accent">{"questions"}</span></h2>
            { for FAQ.iter().enumerate().map(|(index, item)| {
                let is_open = *open == Some(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |_: MouseEvent| {
                        open.set(toggle_faq(*open, index));
                    })
                };
                html! {
                    <div class="faq-item" key={index}>
                        <button class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                            <span>{ item.question }</span>
                            <span>{ if is_open { "−" } else { "+" } }</span>
                        </button>
                        if is_open {
                            <p class="faq-answer">{ item.answer }</p>
                        }
                    </div>
                }
            }) }
        </section>
    }
}

/// One item open at a time; clicking the open one closes it.
fn toggle_faq(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials">
            <span class="section-kicker">{"07 / SIGNALS"}</span>
            <div class="card-grid">
                { for TESTIMONIALS.iter().map(|testimonial| html! {
                    <div class="card testimonial" key={testimonial.author}>
                        <blockquote>{ format!("“{}”", testimonial.quote) }</blockquote>
                        <span class="card-meta">{ format!("{} / {}", testimonial.author, testimonial.company) }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            { format!("© {} NODEFORGE STUDIO. ALL BLOCKS RESERVED.", year) }
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn call_to_action_is_one_link_without_nested_controls() {
        let VNode::VTag(tag) = call_to_action("#contact", "hero-cta") else {
            panic!("expected an element");
        };
        assert_eq!(tag.tag(), "a");
        assert!(tag
            .children()
            .iter()
            .all(|child| !matches!(child, VNode::VTag(_))));
    }

    #[test]
    fn faq_keeps_one_item_open() {
        assert_eq!(toggle_faq(None, 2), Some(2));
        assert_eq!(toggle_faq(Some(2), 1), Some(1));
        assert_eq!(toggle_faq(Some(1), 1), None);
    }

    #[test]
    fn marquee_has_three_stats() {
        assert_eq!(STATS.len(), 3);
        assert!(STATS.iter().all(|stat| !stat.value.is_empty()));
    }
}
