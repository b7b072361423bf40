#[rocket::main]
async fn main() -> anyhow::Result<()> {
  tunebox_lib::run().await
}
