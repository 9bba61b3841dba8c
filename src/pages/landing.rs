//! Swasthya Sahayak landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single static marketing page. All interactivity comes from the
//! components it composes; the page itself only lays out content.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::fade_in::FadeIn;
use crate::components::mobile_nav::{MobileNav, NavLink};
use crate::components::scroll_progress::{ScrollProgress, use_viewport_sample};
use crate::components::stats::{StatItem, StatsSection};
use crate::components::theme_toggle::ThemeToggle;
use crate::config::FxConfig;

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "How it works", href: "#how-it-works" },
    NavLink { label: "Impact", href: "#stats" },
    NavLink { label: "Get started", href: "#get-started" },
];

pub const STATS: [StatItem; 4] = [
    StatItem { count: "2500", label: "Villages reached" },
    StatItem { count: "98", label: "Users who felt heard" },
    StatItem { count: "12", label: "Languages spoken" },
    StatItem { count: "24", label: "Hours a day, every day" },
];

pub const CHAT_BUTTON_ID: &str = "chatBtn";
pub const START_CONVERSATION_BUTTON_ID: &str = "startConversationBtn";
pub const GET_PLATFORMS_BUTTON_ID: &str = "getPlatformsBtn";

/// Ids of the call-to-action buttons that carry the loading state.
pub const ACTION_BUTTON_IDS: [&str; 3] = [CHAT_BUTTON_ID, START_CONVERSATION_BUTTON_ID, GET_PLATFORMS_BUTTON_ID];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "fas fa-language",
        "Speaks your language",
        "Describe symptoms in Hindi, Tamil, Bengali or nine other languages.",
    ),
    (
        "fas fa-stethoscope",
        "Guidance you can act on",
        "Clear next steps: home care, a visit to the nearest clinic, or urgent help.",
    ),
    (
        "fas fa-mobile-screen",
        "Works on any phone",
        "Chat on the web, WhatsApp or SMS with no app install required.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    ("Start a conversation", "Say hello on the platform you already use."),
    ("Describe how you feel", "Answer a few simple questions at your own pace."),
    ("Get next steps", "Receive advice and a referral to local care when needed."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let threshold_px = expect_context::<FxConfig>().scroll_threshold_px;
    let viewport = use_viewport_sample(threshold_px);
    let mobile_links = NAV_LINKS.to_vec();
    let stats = STATS.to_vec();

    view! {
        <ScrollProgress sample=viewport/>
        <header class="site-header" style:box-shadow=move || viewport.get().header_shadow()>
            <div class="container header-inner">
                <a class="logo" href="#">
                    <i class="fas fa-heart-pulse"></i>
                    <span>"Swasthya Sahayak"</span>
                </a>
                <nav class="desktop-nav">
                    {NAV_LINKS.into_iter().map(|NavLink { label, href }| view! { <a href=href>{label}</a> }).collect_view()}
                </nav>
                <div class="header-actions">
                    <ThemeToggle/>
                    <MobileNav links=mobile_links/>
                </div>
            </div>
        </header>

        <main>
            <section class="hero">
                <FadeIn class="container hero-content">
                    <h1>"Health guidance in your language, whenever you need it"</h1>
                    <p class="hero-subtitle">
                        "Swasthya Sahayak is a friendly health assistant that listens, asks the right questions and points you to the right care."
                    </p>
                    <div class="hero-actions">
                        <ActionButton id=START_CONVERSATION_BUTTON_ID label="Start a conversation"/>
                        <ActionButton id=CHAT_BUTTON_ID label="Chat now" class="btn btn-secondary"/>
                    </div>
                </FadeIn>
            </section>

            <section id="features" class="features">
                <div class="container features-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, body)| {
                            view! {
                                <FadeIn class="feature-card">
                                    <i class=icon></i>
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <div class="container steps">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (title, body))| {
                            let number = index + 1;
                            view! {
                                <FadeIn class="step">
                                    <span class="step-number">{number}</span>
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <StatsSection stats=stats/>

            <section id="get-started" class="cta">
                <FadeIn class="container cta-inner">
                    <h2>"Find Swasthya Sahayak on your favourite platform"</h2>
                    <ActionButton id=GET_PLATFORMS_BUTTON_ID label="Get platforms"/>
                </FadeIn>
            </section>
        </main>

        <footer class="site-footer">
            <div class="container">
                <p>"Swasthya Sahayak does not replace a doctor. In an emergency call 108."</p>
            </div>
        </footer>
    }
}
