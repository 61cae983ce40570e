//! login / logout / whoami

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Args;

use crate::context::AppContext;

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long, env = "SIPINJAM_EMAIL")]
    pub email: String,

    /// Password; read from stdin when omitted
    #[arg(long, env = "SIPINJAM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

fn read_password() -> anyhow::Result<String> {
    eprint!("Kata sandi: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub async fn login(args: LoginArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_password()?,
    };
    let session = ctx.check(ctx.client.auth().login(&args.email, &password).await)?;
    ctx.store
        .save(&session)
        .with_context(|| format!("Gagal menyimpan sesi ke {}", ctx.store.path().display()))?;
    tracing::debug!(path = %ctx.store.path().display(), "Session saved");

    match session.user() {
        Some(user) => println!("Selamat datang, {} ({})", user.name, user.role.label()),
        None => println!("Login berhasil"),
    }
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    if ctx.client.session().is_authenticated()
        && let Err(e) = ctx.client.auth().logout().await
    {
        // token is dropped locally either way
        tracing::warn!(error = %e, "Server-side logout failed");
    }
    ctx.store.delete()?;
    println!("Anda telah keluar");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.require_login()?;
    let user = ctx.check(ctx.client.auth().me().await)?;
    println!("{} <{}>", user.name, user.email);
    println!("Peran: {}", user.role.label());
    if let Some(kind) = &user.borrower_type {
        println!("Jenis peminjam: {kind}");
    }
    Ok(())
}
