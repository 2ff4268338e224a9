extern crate termcolor;
extern crate tokio;

use solution_pusher::{
    cache::Cache,
    client::{self, Api, Session},
    config::Config,
    error::Result,
    metadata::Parser,
    precheck::{self, precheck},
    sync::{Progress, Pusher},
    tree::SolutionTree,
};
use std::{future::Future, io::Write};
use termcolor::{Color, WriteColor};
use tokio::signal;

#[allow(unused_must_use)]
fn report<W: WriteColor>(stdout: &mut W, progress: Progress<'_>) {
    if let Progress::Uploaded { receipt, .. } = progress {
        write_ok!(
            stdout,
            "Uploaded",
            "{} {} {}",
            receipt.method,
            receipt.url,
            receipt.status.as_u16()
        );
    }
}

#[allow(unused_must_use)]
fn check<W: WriteColor>(stdout: &mut W, tree: &SolutionTree, parser: &Parser) -> Result<()> {
    write_info!(stdout, "Check", "Checking metadata under {}", tree.root().display());
    if let Err(e) = precheck(tree, parser) {
        if let precheck::Error::Malformed(files) = &e {
            for f in files {
                write_error!(stdout, "Malformed", "{}", f.display());
            }
        }
        return Err(e.into());
    }
    Ok(())
}

#[allow(unused_must_use)]
async fn upload<W, A, L, I>(
    stdout: &mut W,
    login: L,
    interrupt: I,
    tree: &SolutionTree,
    parser: &Parser,
    cache: &mut Cache,
) -> Result<()>
where
    W: WriteColor,
    A: Api,
    L: Future<Output = client::Result<A>>,
    I: Future<Output = ()>,
{
    let api = login.await?;
    let outcome = {
        let mut pusher = Pusher::new(&api, &mut *cache, parser);
        tokio::select! {
            biased;
            _ = interrupt => None,
            r = pusher.push_tree(tree, |p| report(stdout, p)) => Some(r),
        }
    };
    match outcome {
        Some(r) => {
            let summary = r?;
            write_ok!(stdout, "Finished", "{}", summary);
        }
        None => {
            cache.save()?;
            write_warn!(stdout, "Saved", "Interrupted, cache saved to {}", cache.path().display());
        }
    }
    Ok(())
}

/// Precheck, then log in and push every changed solution. `login` is only
/// awaited once the precheck passed. The cache is saved even when the upload
/// fails part way.
#[allow(unused_must_use)]
pub async fn run<W, A, L, I>(stdout: &mut W, config: &Config, login: L, interrupt: I) -> Result<()>
where
    W: WriteColor,
    A: Api,
    L: Future<Output = client::Result<A>>,
    I: Future<Output = ()>,
{
    let tree = SolutionTree::new(&config.solution_root);
    let parser = Parser::new();
    check(stdout, &tree, &parser)?;

    let mut cache = Cache::load(&config.cache_path);
    write_info!(stdout, "Cache", "{} entries from {}", cache.len(), cache.path().display());
    let result = upload(stdout, login, interrupt, &tree, &parser, &mut cache).await;
    let saved = cache.save();
    result?;
    saved?;
    Ok(())
}

async fn ctrl_c() {
    if signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

pub async fn push<W: WriteColor>(stdout: &mut W) -> Result<()> {
    let config = Config::from_env()?;
    run(stdout, &config, Session::from_config(&config), ctrl_c()).await
}
