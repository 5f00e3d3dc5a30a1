use chrono::Datelike;
use log::info;
use yew::prelude::*;

use super::content::{self, Plan, CONTACT_EMAIL_SUBJECT, FEATURES, HEADQUARTERS, PHONE_CHANNEL, PLANS, POWER_PLAY_POINTS, SOCIAL_LINKS};
use crate::components::fallback_image::FallbackImage;
use crate::config;
use crate::navigation::state::Section;
use crate::reveal::component::Reveal;
use crate::reveal::controller::RevealDelay;

const LANDING_CSS: &str = r#"
    .landing-page section {
        position: relative;
        overflow: hidden;
    }
    .dark {
        background: #000;
        color: #fff;
    }
    .light {
        background: linear-gradient(to bottom, #fff, #f9fafb);
        color: #000;
    }
    .grid-pattern {
        position: absolute;
        inset: 0;
        background-image:
            linear-gradient(rgba(253, 234, 8, 0.03) 1px, transparent 1px),
            linear-gradient(90deg, rgba(253, 234, 8, 0.03) 1px, transparent 1px);
        background-size: 50px 50px;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding-top: 10rem;
    }
    .hero-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .hero-badge {
        display: inline-block;
        background: #FDEA08;
        color: #000;
        font-weight: 900;
        padding: 0.5rem 1.25rem;
        transform: skewX(-6deg);
        text-transform: uppercase;
        letter-spacing: 0.1em;
        font-size: 0.875rem;
    }
    .hero h1 {
        font-size: 6rem;
        line-height: 0.9;
        letter-spacing: -0.05em;
        margin: 1.5rem 0;
    }
    .hero h2 {
        font-size: 3.75rem;
        letter-spacing: -0.05em;
        margin: 0;
    }
    .hero-glow {
        text-shadow: 0 0 30px rgba(253, 234, 8, 0.5);
    }
    .hero-copy {
        color: #d1d5db;
        font-size: 1.25rem;
        max-width: 32rem;
        line-height: 1.6;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        padding-top: 1rem;
    }
    .hero-visual {
        position: relative;
        display: flex;
        justify-content: center;
        animation: fadeInUp 1.5s ease-out;
    }
    .hero-visual img {
        width: 100%;
        max-width: 500px;
        height: auto;
        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.5));
        transition: transform 0.7s ease;
    }
    .hero-visual:hover img {
        transform: scale(1.05) translateY(-0.5rem);
    }
    .btn-primary, .btn-outline {
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        text-align: center;
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .btn-primary {
        background: #FDEA08;
        color: #000;
        box-shadow: 0 10px 40px -10px rgba(253, 234, 8, 0.4);
    }
    .btn-primary:hover {
        background: #fff;
        transform: scale(1.05);
    }
    .btn-outline {
        border: 2px solid #fff;
        color: #fff;
    }
    .btn-outline:hover {
        background: #fff;
        color: #000;
    }
    .section-padding {
        padding: 8rem 0;
    }
    .section-heading {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 5rem;
    }
    .section-heading h2 {
        font-size: 3.75rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: -0.05em;
        margin-bottom: 1.5rem;
    }
    .inverse-tag {
        color: #FDEA08;
        background: #000;
        padding: 0.25rem 0.75rem;
    }
    .power-pill {
        display: inline-flex;
        gap: 0.5rem;
        background: linear-gradient(to right, #FDEA08, #fde047);
        color: #000;
        font-weight: 900;
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        margin-bottom: 2.5rem;
        text-transform: uppercase;
    }
    .power-points {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        max-width: 56rem;
        margin: 0 auto;
        text-align: left;
    }
    .power-point {
        background: #111;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid #1f2937;
        display: flex;
        align-items: center;
        gap: 1.25rem;
        font-weight: 700;
        font-size: 1.25rem;
        transition: all 0.3s ease;
    }
    .power-point:hover {
        border-color: #FDEA08;
        box-shadow: 0 0 30px -5px rgba(253, 234, 8, 0.3);
    }
    .check {
        background: #FDEA08;
        color: #000;
        border-radius: 0.75rem;
        padding: 0.75rem;
        font-weight: 900;
    }
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .feature-card {
        background: #fff;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid #f3f4f6;
        height: 100%;
        transition: all 0.5s ease;
    }
    .feature-card:hover {
        border-color: #FDEA08;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .feature-icon {
        background: #000;
        width: 4rem;
        height: 4rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        margin-bottom: 1.5rem;
    }
    .feature-card h3 {
        font-weight: 900;
        text-transform: uppercase;
    }
    .feature-card p {
        color: #4b5563;
        line-height: 1.6;
    }
    .plan-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        max-width: 1500px;
        margin: 0 auto;
    }
    .plan {
        position: relative;
        display: flex;
        flex-direction: column;
        padding: 2rem;
        border-radius: 1.5rem;
        height: 100%;
        background: #0a0a0a;
        border: 1px solid #1f2937;
        transition: all 0.5s ease;
    }
    .plan.highlight {
        background: #1a1a1a;
        border: 2px solid #FDEA08;
        transform: translateY(-1.5rem);
        box-shadow: 0 20px 60px -15px rgba(253, 234, 8, 0.3);
    }
    .plan-badge {
        position: absolute;
        top: -1rem;
        left: 50%;
        transform: translateX(-50%);
        background: linear-gradient(to right, #FDEA08, #facc15);
        color: #000;
        font-size: 0.75rem;
        font-weight: 900;
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        text-transform: uppercase;
    }
    .plan-price {
        font-size: 3rem;
        font-weight: 900;
    }
    .plan-split {
        display: inline-block;
        margin-top: 0.75rem;
        padding: 0.5rem 0.75rem;
        border-radius: 0.5rem;
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
        background: #1f2937;
        color: #FDEA08;
    }
    .plan.highlight .plan-split {
        background: #FDEA08;
        color: #000;
    }
    .plan ul {
        flex: 1;
        list-style: none;
        padding: 0;
        color: #d1d5db;
        font-size: 0.875rem;
    }
    .plan li {
        display: flex;
        gap: 0.75rem;
        margin-bottom: 1rem;
    }
    .plan-cta {
        display: block;
        width: 100%;
        padding: 1rem 0;
        border-radius: 0.75rem;
        text-align: center;
        font-weight: 900;
        text-transform: uppercase;
        text-decoration: none;
        border: 2px solid #fff;
        color: #fff;
        transition: all 0.3s ease;
    }
    .plan.highlight .plan-cta {
        background: #FDEA08;
        border-color: #FDEA08;
        color: #000;
    }
    .contact-layout {
        display: flex;
        gap: 5rem;
        align-items: center;
    }
    .contact-layout > div {
        flex: 1;
        max-width: 36rem;
    }
    .contact-channel {
        display: flex;
        align-items: flex-start;
        gap: 1.25rem;
        margin-bottom: 2rem;
    }
    .contact-channel a {
        color: #4b5563;
        font-size: 1.125rem;
        word-break: break-all;
    }
    .contact-form {
        background: #fff;
        padding: 3rem;
        border-radius: 1.5rem;
        border: 2px solid #f3f4f6;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .contact-form label {
        display: block;
        font-size: 0.875rem;
        font-weight: 700;
        text-transform: uppercase;
        margin-bottom: 0.5rem;
    }
    .contact-form input, .contact-form textarea {
        width: 100%;
        box-sizing: border-box;
        background: #f9fafb;
        border: 2px solid #e5e7eb;
        padding: 1rem;
        border-radius: 0.75rem;
        margin-bottom: 1.5rem;
        resize: none;
    }
    .contact-form input:focus, .contact-form textarea:focus {
        outline: none;
        border-color: #FDEA08;
        background: #fff;
    }
    .contact-form button {
        width: 100%;
        background: #000;
        color: #fff;
        padding: 1.25rem 0;
        border: none;
        border-radius: 0.75rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        cursor: pointer;
    }
    .contact-form button:hover {
        background: #FDEA08;
        color: #000;
    }
    .footer {
        background: linear-gradient(to bottom, #000, #030712);
        border-top: 1px solid #111827;
        padding: 5rem 0 2.5rem;
        color: #9ca3af;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 3rem;
        margin-bottom: 4rem;
    }
    .footer h4 {
        color: #fff;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .footer ul {
        list-style: none;
        padding: 0;
    }
    .footer li {
        margin-bottom: 1rem;
    }
    .footer a {
        color: #9ca3af;
        text-decoration: none;
    }
    .footer a:hover {
        color: #FDEA08;
    }
    .social-links {
        display: flex;
        gap: 1rem;
    }
    .footer a.social-link {
        width: 3rem;
        height: 3rem;
        border-radius: 0.75rem;
        background: #1f2937;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 900;
        transition: all 0.3s ease;
    }
    .footer a.social-link:hover {
        background: #FDEA08;
        color: #000;
        transform: scale(1.1);
    }
    .footer-bottom {
        border-top: 1px solid #111827;
        padding-top: 2rem;
        display: flex;
        justify-content: space-between;
        font-size: 0.875rem;
        color: #6b7280;
    }
    .h-full, .h-full > .contact-form {
        height: 100%;
    }
    .footer-logo {
        height: 3rem;
        width: auto;
        margin-bottom: 2rem;
    }
    @media (max-width: 1280px) {
        .plan-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
    @media (max-width: 1024px) {
        .feature-grid {
            grid-template-columns: 1fr 1fr;
        }
        .contact-layout {
            flex-direction: column;
        }
    }
    @media (max-width: 768px) {
        .hero-grid, .power-points, .plan-grid, .feature-grid, .footer-grid {
            grid-template-columns: 1fr;
        }
        .hero h1 {
            font-size: 3rem;
        }
        .hero h2 {
            font-size: 2.25rem;
        }
        .hero-actions {
            flex-direction: column;
        }
        .hero-visual {
            order: -1;
        }
        .plan.highlight {
            transform: none;
        }
        .section-padding {
            padding: 5rem 0;
        }
        .section-heading h2 {
            font-size: 2.25rem;
        }
        .footer-bottom {
            flex-direction: column;
            gap: 1rem;
        }
    }
"#;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero dark">
            <div class="grid-pattern"></div>
            <div class="container hero-grid">
                <div>
                    <Reveal>
                        <div class="hero-badge">{"Become an ERO with Us"}</div>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms100}>
                        <h1 class="font-heavy">{"GOING"}<br />{"PLACES?"}</h1>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms200}>
                        <h2 class="font-heavy">{"GO "}<span class="accent hero-glow">{"TAXI."}</span></h2>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms300}>
                        <p class="hero-copy">
                            {"Professional Tax Software & DFY Tax Business in a Box. Start your own tax preparation business with industry-leading tools and mentorship."}
                        </p>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms300}>
                        <div class="hero-actions">
                            <a href={Section::Pricing.href()} class="btn-primary">{"Get Started ›"}</a>
                            <a href={Section::Features.href()} class="btn-outline">{"View Features"}</a>
                        </div>
                    </Reveal>
                </div>
                <div class="hero-visual">
                    <FallbackImage
                        src={config::asset_url("/hero-box.jpg")}
                        fallback={config::asset_url("/taxi.png")}
                        alt="Taxi Tax Software Box"
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(PowerPlay)]
fn power_play() -> Html {
    html! {
        <section id={Section::PowerPlay.anchor()} class="dark section-padding">
            <div class="container" style="max-width: 64rem; text-align: center;">
                <Reveal>
                    <div class="power-pill">{"⚡ The Power Play!"}</div>
                </Reveal>
                <Reveal delay={RevealDelay::Ms100}>
                    <h2 class="font-heavy" style="font-size: 4.5rem; margin: 0 0 0.75rem; text-transform: uppercase;">
                        {"Earn More. Do Less."}
                    </h2>
                    <h2 class="font-heavy accent" style="font-size: 4.5rem; margin: 0 0 3rem; text-transform: uppercase;">
                        {"Scale Fast."}
                    </h2>
                </Reveal>
                <Reveal delay={RevealDelay::Ms200}>
                    <h3 style="font-size: 2.25rem; color: #e5e7eb; text-transform: uppercase;">
                        {"Tired of Splitting Profits?"}
                    </h3>
                    <p style="font-size: 1.5rem; margin-bottom: 4rem;">
                        {"You keep more of what you earn while delivering "}
                        <span class="accent" style="font-weight: 900;">{"TOP-TIER TAX SERVICES."}</span>
                    </p>
                </Reveal>
                <div class="power-points">
                    { for POWER_PLAY_POINTS.iter().enumerate().map(|(i, point)| html! {
                        <Reveal key={i} delay={RevealDelay::from_millis(200 + i as u32 * 100)}>
                            <div class="power-point">
                                <span class="check">{"✓"}</span>
                                <span>{*point}</span>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id={Section::Features.anchor()} class="light section-padding">
            <div class="container">
                <div class="section-heading">
                    <Reveal>
                        <h2>{"Why Choose "}<span class="inverse-tag">{"Taxi?"}</span></h2>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms100}>
                        <p style="font-size: 1.25rem; color: #4b5563;">
                            {"Everything you need to run a successful tax business, packaged in one powerful platform."}
                        </p>
                    </Reveal>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| {
                        let delay = if i % 2 == 0 { RevealDelay::None } else { RevealDelay::Ms100 };
                        html! {
                            <Reveal key={i} {delay}>
                                <div class="feature-card">
                                    <div class="feature-icon">{feature.icon}</div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

fn plan_card(plan: &Plan) -> Html {
    html! {
        <div class={classes!("plan", plan.highlight.then(|| "highlight"))}>
            { if plan.highlight {
                html! { <div class="plan-badge">{"Best Value"}</div> }
            } else {
                html! {}
            } }
            <h3 class={classes!(plan.highlight.then(|| "accent"))} style="text-transform: uppercase; margin-bottom: 0.5rem;">
                {plan.name}
            </h3>
            <p style="font-size: 0.75rem; color: #6b7280; font-weight: 700; text-transform: uppercase;">{plan.subtitle}</p>
            <div style="margin-bottom: 1.5rem;">
                <span class="plan-price">{plan.price}</span>
                <div class="plan-split">{plan.split}</div>
            </div>
            <p style="font-size: 0.875rem; color: #9ca3af; padding-bottom: 1.5rem; border-bottom: 1px solid #1f2937;">
                {plan.description}
            </p>
            <ul>
                { for plan.features.iter().map(|feature| html! {
                    <li>
                        <span class={classes!(plan.highlight.then(|| "accent"))}>{"✓"}</span>
                        <span>{*feature}</span>
                    </li>
                }) }
            </ul>
            <a href={plan.checkout_url} target="_blank" rel="noopener noreferrer" class="plan-cta">
                {"Choose Plan"}
            </a>
        </div>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <section id={Section::Pricing.anchor()} class="dark section-padding">
            <div class="grid-pattern"></div>
            <div class="container">
                <div class="section-heading">
                    <Reveal>
                        <h2>{"Software "}<span class="accent">{"Packages"}</span></h2>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms100}>
                        <p style="font-size: 1.25rem; color: #d1d5db;">
                            {"Choose the package that drives your business forward."}
                        </p>
                    </Reveal>
                </div>
                <div class="plan-grid">
                    { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <Reveal key={i} delay={RevealDelay::from_millis((i as u32 * 100) % 400)}>
                            { plan_card(plan) }
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn contact_channel(icon: &'static str, title: &'static str, body: Html) -> Html {
    html! {
        <div class="contact-channel">
            <div class="feature-icon" style="color: #FDEA08; flex-shrink: 0;">{icon}</div>
            <div>
                <h4 style="font-weight: 900; text-transform: uppercase; font-size: 1.25rem; margin: 0 0 0.5rem;">{title}</h4>
                {body}
            </div>
        </div>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    // Form submission is not wired to any service yet.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, no submission service configured");
    });

    let mailto = content::mailto_link(config::SUPPORT_EMAIL, CONTACT_EMAIL_SUBJECT);

    html! {
        <section id={Section::Contact.anchor()} class="light section-padding">
            <div class="container contact-layout">
                <div>
                    <Reveal>
                        <h2 style="font-size: 3.75rem; font-weight: 900; text-transform: uppercase; line-height: 1.1;">
                            {"Ready to"}<br />
                            <span class="inverse-tag" style="display: inline-block; margin-top: 0.5rem;">{"Start Driving?"}</span>
                        </h2>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms100}>
                        <p style="font-size: 1.25rem; color: #4b5563; margin-bottom: 3rem;">
                            {"Whether you're a new ERO or a seasoned pro, we have the tools you need. Reach out today for a demo or consultation."}
                        </p>
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms100}>
                        { contact_channel("✉️", "Email Us", html! {
                            <a href={mailto}>{config::SUPPORT_EMAIL}</a>
                        }) }
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms200}>
                        { contact_channel(PHONE_CHANNEL.icon, PHONE_CHANNEL.title, html! {
                            <>
                                <p style="font-weight: 700; font-size: 1.125rem; margin: 0;">{config::SUPPORT_PHONE}</p>
                                { for PHONE_CHANNEL.lines.iter().map(|line| html! {
                                    <p style="font-size: 0.875rem; color: #6b7280;">{*line}</p>
                                }) }
                            </>
                        }) }
                    </Reveal>
                    <Reveal delay={RevealDelay::Ms300}>
                        { contact_channel(HEADQUARTERS.icon, HEADQUARTERS.title, html! {
                            <>
                                { for HEADQUARTERS.lines.iter().map(|line| html! {
                                    <p style="font-size: 1.125rem; color: #4b5563; margin: 0;">{*line}</p>
                                }) }
                            </>
                        }) }
                    </Reveal>
                </div>
                <div>
                    <Reveal delay={RevealDelay::Ms200} class={classes!("h-full")}>
                        <div class="contact-form">
                            <h3 style="font-size: 1.875rem; font-weight: 900; text-transform: uppercase; margin-bottom: 2rem;">
                                {"Send a Message"}
                            </h3>
                            <form {onsubmit}>
                                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem;">
                                    <div>
                                        <label>{"First Name"}</label>
                                        <input type="text" placeholder="John" />
                                    </div>
                                    <div>
                                        <label>{"Last Name"}</label>
                                        <input type="text" placeholder="Doe" />
                                    </div>
                                </div>
                                <label>{"Email Address"}</label>
                                <input type="email" placeholder="john@example.com" />
                                <label>{"Phone Number"}</label>
                                <input type="tel" placeholder="(555) 123-4567" />
                                <label>{"Message"}</label>
                                <textarea rows="4" placeholder="I'm interested in the Business in a Box..."></textarea>
                                <button type="submit">{"Send Request ➤"}</button>
                            </form>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <Reveal>
                            <FallbackImage
                                src={config::asset_url("/logo.png")}
                                fallback={config::asset_url("/logo.png")}
                                alt="Taxi Tax Software Logo"
                                class={classes!("footer-logo")}
                            />
                        </Reveal>
                        <Reveal delay={RevealDelay::Ms100}>
                            <p style="max-width: 24rem; font-size: 1.125rem; line-height: 1.6;">
                                {"Empowering tax professionals with cutting-edge technology and business support. Go Places with Go Taxi."}
                            </p>
                        </Reveal>
                        <Reveal delay={RevealDelay::Ms200}>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a href={link.href} class="social-link" title={link.name} aria-label={link.name}>
                                        {link.glyph}
                                    </a>
                                }) }
                            </div>
                        </Reveal>
                    </div>
                    <div>
                        <Reveal delay={RevealDelay::Ms100}>
                            <h4>{"Platform"}</h4>
                            <ul>
                                <li><a href={Section::Features.href()}>{"Features"}</a></li>
                                <li><a href={Section::Pricing.href()}>{"Pricing"}</a></li>
                                <li><a href={Section::PowerPlay.href()}>{"Why Choose Us"}</a></li>
                                <li><a href={Section::Contact.href()}>{"Try Demo"}</a></li>
                            </ul>
                        </Reveal>
                    </div>
                    <div>
                        <Reveal delay={RevealDelay::Ms200}>
                            <h4>{"Legal"}</h4>
                            <ul>
                                <li><a href="#">{"Privacy Policy"}</a></li>
                                <li><a href="#">{"Terms of Service"}</a></li>
                                <li><a href="#">{"Bank Agreements"}</a></li>
                                <li><a href={Section::Contact.href()}>{"Contact Support"}</a></li>
                            </ul>
                        </Reveal>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} Taxi Tax Software. All rights reserved.", year)}</p>
                    <p>{"Designed for Professional EROs."}</p>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Hero />
            <PowerPlay />
            <Features />
            <Pricing />
            <Contact />
            <Footer />
        </div>
    }
}
