/// Root component for the Tech Cursos site.
/// Every page shares the accessibility bar, the navbar and the footer; the
/// course page hosts the reviews widget.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::components::accessibility_bar::AccessibilityBar;
use crate::components::course_tabs::{CourseTabs, TabPanel};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reviews_widget::ReviewsWidget;
use crate::config::SiteConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = SiteConfig::load();
    provide_context(config.clone());

    view! {
        <Title text=config.brand />
        <Router>
            <AccessibilityBar />
            <Navbar />
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/cursos" view=CoursePage />
                    <Route path="/*any" view=UnderConstruction />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>{ "Aprenda tecnologia com quem vive o mercado" }</h1>
            <p>{ "Cursos online de programação, dados, design e cloud." }</p>
            <a href="/cursos" class="navbar-btn navbar-btn-primary">{ "Ver cursos" }</a>
            <a href="#destaques" class="hero-link">{ "Destaques" }</a>
        </section>
        <section id="destaques" class="highlights">
            <h2>{ "Destaques" }</h2>
            <p>{ "Trilhas completas, projetos práticos e certificado ao final." }</p>
        </section>
    }
}

#[component]
fn CoursePage() -> impl IntoView {
    let tabs = vec![
        TabPanel::new("visao-geral", "Visão geral", || view! {
            <p>{ "Do zero ao primeiro projeto publicado, no seu ritmo." }</p>
        }),
        TabPanel::new("conteudo", "Conteúdo", || view! {
            <ul>
                <li>{ "Fundamentos" }</li>
                <li>{ "Projeto guiado" }</li>
                <li>{ "Publicação" }</li>
            </ul>
        }),
        TabPanel::new("avaliacoes-tab", "Avaliações", || view! { <ReviewsWidget /> }),
    ];

    view! {
        <section class="course">
            <h1>{ "Desenvolvimento Web Completo" }</h1>
            <CourseTabs tabs=tabs />
        </section>
    }
}

#[component]
fn UnderConstruction() -> impl IntoView {
    view! {
        <section class="under-construction">
            <h1>{ "Página em construção" }</h1>
            <a href="/">{ "Voltar ao início" }</a>
        </section>
    }
}
