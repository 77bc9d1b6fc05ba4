#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function without the `csr` feature;
    // the library can still be built and unit-tested natively
}

#[cfg(feature = "csr")]
pub fn main() {
    // client-side entry point for `trunk serve`
    use techcursos::app::*;

    techcursos::utils::panic_hook::init();
    leptos::mount_to_body(App);
}
