use super::Context;
use crate::server::{self, AppState};
use std::sync::Arc;
use vocab_index::Scorer;

pub fn run(ctx: &Context, bind: Option<&str>) -> anyhow::Result<()> {
    let db = ctx.open_db()?;
    tracing::info!(
        "Serving {} words from {}",
        db.count()?,
        ctx.db_path.display()
    );

    let bind = bind.unwrap_or(&ctx.config.server.bind).to_string();
    let state = Arc::new(AppState::new(db, Scorer::new(ctx.config.search.clone())));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(state, &bind))
}
