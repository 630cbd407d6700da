#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sipcompare::run().await
}
