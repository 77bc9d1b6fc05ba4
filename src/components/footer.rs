use leptos::*;

use crate::config::use_site_config;
use crate::utils::dom::{scroll_to_top, scroll_y};

struct FooterSection {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

static SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title: "Cursos",
        links: &[
            ("/cursos", "Todos os Cursos"),
            ("/cursos?category=programming", "Programação"),
            ("/cursos?category=data", "Data Science"),
            ("/cursos?category=design", "Design"),
            ("/cursos?category=cloud", "Cloud & DevOps"),
        ],
    },
    FooterSection {
        title: "Empresa",
        links: &[
            ("/dashboard", "Sobre Nós"),
            ("/novidades", "Blog"),
            ("/contato", "Contato"),
            ("#", "Trabalhe Conosco"),
            ("#", "Parceiros"),
        ],
    },
    FooterSection {
        title: "Suporte",
        links: &[
            ("#", "Central de Ajuda"),
            ("#", "FAQ"),
            ("/contato", "Fale Conosco"),
            ("#", "Política de Reembolso"),
            ("#", "Status do Sistema"),
        ],
    },
];

const SOCIAL: [&str; 4] = ["Facebook", "Instagram", "LinkedIn", "YouTube"];

const LEGAL: [&str; 3] = ["Termos de Uso", "Política de Privacidade", "Cookies"];

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();

    let threshold = config.scroll_top_offset;
    let (visible, set_visible) = create_signal(scroll_y() > threshold);
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_visible.set(scroll_y() > threshold);
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <img src="images/logo.png" alt=config.brand.clone() class="footer-logo-img" />
                            <span class="footer-logo-text">{config.brand.clone()}</span>
                        </div>
                        <p class="footer-description">
                            { "Transformando carreiras através da educação em tecnologia. \
                               Aprenda com os melhores cursos online e conquiste seu lugar no mercado tech." }
                        </p>
                        <div class="footer-social">
                            {SOCIAL.into_iter().map(|network| view! {
                                <a href="#" class="footer-social-link" aria-label=network>{network}</a>
                            }).collect_view()}
                        </div>
                    </div>

                    {SECTIONS.iter().map(|section| view! {
                        <div class="footer-section">
                            <h3 class="footer-section-title">{section.title}</h3>
                            <ul class="footer-links">
                                {section.links.iter().map(|&(href, label)| view! {
                                    <li><a href=href class="footer-link">{label}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© 2025 {}. Todos os direitos reservados.", config.brand)}
                    </p>
                    <div class="footer-legal">
                        {LEGAL.into_iter().map(|label| view! {
                            <a href="#" class="footer-legal-link">{label}</a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>

        <button
            class="scroll-to-top"
            class:visible=move || visible.get()
            aria-label="Voltar ao topo"
            on:click=move |_| scroll_to_top()
        >
            { "↑" }
        </button>
    }
}
