use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::SocialLinks;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <main class="home">
            <img
                class="avatar"
                src="/avatar.svg"
                alt="Chris Roth"
                width="80"
                height="80"
            />
            <h1>"Chris Roth"</h1>
            <p class="title">"Software Engineer & Product Builder"</p>
            <p class="bio">
                "Design-obsessed software engineer with a tendency to wander into \
                 product management. I build things that matter and write about \
                 what I learn along the way."
            </p>
            <p class="cta">
                <A href="/blog">
                    "Read my writing"
                    <svg
                        class="arrow"
                        fill="none"
                        stroke="currentColor"
                        viewBox="0 0 24 24"
                        aria-hidden="true"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M9 5l7 7-7 7"
                        />
                    </svg>
                </A>
            </p>
            <SocialLinks />
        </main>
    }
}
