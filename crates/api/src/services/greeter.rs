/// Produces the greeting returned by `GET /api/categorias/saudacao/{nome}`.
pub trait Greeter: Send + Sync {
    fn greet(&self, name: &str) -> String;
}

/// Default greeter.
#[derive(Debug, Default, Clone, Copy)]
pub struct WelcomeGreeter;

impl Greeter for WelcomeGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Bem-vindo, {name}")
    }
}
