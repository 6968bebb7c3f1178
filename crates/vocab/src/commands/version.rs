pub fn run() -> anyhow::Result<()> {
    println!("vocab {}", env!("CARGO_PKG_VERSION"));
    println!("English/German/Vietnamese vocabulary with hybrid cosine search");
    Ok(())
}
