pub mod debug;
pub mod health;
pub mod status;

pub async fn root() -> &'static str {
    "Hello World!"
}
