use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/">"Chris Roth"</A></li>
                <li><A href="/blog">"Blog"</A></li>
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>
                <a href="#top"><small>{"\u{2191}"} Copyright {"\u{24d2}"}2026, Chris Roth {"\u{2191}"}</small></a>
            </p>
        </footer>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    // Tell the server response what leptos_router already knows.
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <p><A href="/blog">"Back to the blog"</A></p>
        </main>
    }
}

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    icon: Icon,
}

enum Icon {
    Devicon(&'static str),
    Glyph(&'static str),
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: "https://github.com/cjroth",
        icon: Icon::Devicon("devicon-github-plain"),
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/chrisrxth",
        icon: Icon::Devicon("devicon-linkedin-plain"),
    },
    SocialLink {
        name: "Threads",
        href: "https://www.threads.com/@imaginaryllc",
        icon: Icon::Glyph("\u{0040}"),
    },
    SocialLink {
        name: "Email",
        href: "mailto:hi@cjroth.com",
        icon: Icon::Glyph("\u{2709}"),
    },
];

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="social-links">
            {SOCIAL_LINKS
                .iter()
                .map(|link| view! {
                    <a
                        href=link.href
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=link.name
                    >
                        {match link.icon {
                            Icon::Devicon(class) => leptos::either::Either::Left(view! {
                                <i class=class></i>
                            }),
                            Icon::Glyph(glyph) => leptos::either::Either::Right(view! {
                                <span class="glyph" aria-hidden="true">{glyph}</span>
                            }),
                        }}
                    </a>
                })
                .collect_view()}
        </div>
    }
}
