//! Post commands - the four verbs without the page
//!
//! ```bash
//! fetchtour list --limit 3 --json | jq '.[].title'
//! fetchtour create --title "Hello" --body "World"
//! fetchtour delete 7 --yes
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fetchtour_core::model::truncate_posts;
use fetchtour_core::widgets::delete_list::DELETE_PROMPT;
use fetchtour_core::{Confirm, HttpPostsClient, NewPost, Post, PostsApi, TourConfig};
use tracing::info;

use crate::confirm::{AssumeYes, InquireConfirm};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Number of posts to show (defaults to the configured list limit)
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Title of the new post
    #[arg(long, short)]
    pub title: String,

    /// Content of the new post
    #[arg(long, short)]
    pub body: String,

    /// Owner id (defaults to the configured owner)
    #[arg(long)]
    pub user_id: Option<u64>,

    /// Print the created post as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Post ID to replace
    pub id: u64,

    /// New title
    #[arg(long, short)]
    pub title: String,

    /// New content
    #[arg(long, short)]
    pub body: String,

    /// Owner id sent with the record (defaults to the configured owner)
    #[arg(long)]
    pub user_id: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Post ID to delete
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

fn output_format(output: OutputFormat, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        output
    }
}

fn build_client(config: &TourConfig) -> Result<HttpPostsClient> {
    HttpPostsClient::new(&config.api).context("Failed to build posts client")
}

/// Tree-style listing, one post per branch
fn print_posts(posts: &[Post]) {
    println!("┌─ posts ({})", posts.len());
    println!("│");

    if posts.is_empty() {
        println!("└─ (no posts)");
        return;
    }

    for (i, post) in posts.iter().enumerate() {
        let is_last = i == posts.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let cont_prefix = if is_last { "   " } else { "│  " };

        println!("{} #{} {}", prefix, post.id, post.title);
        println!("{}by user {}", cont_prefix, post.user_id);
    }
}

pub async fn run_list(config: &TourConfig, args: ListArgs) -> Result<()> {
    let client = build_client(config)?;
    let limit = args.limit.unwrap_or(config.widgets.list_limit);

    let posts = client
        .list_posts()
        .await
        .with_context(|| format!("Could not fetch posts from {}", client.base_url()))?;
    let posts = truncate_posts(posts, limit);
    info!(count = posts.len(), "listed posts");

    match output_format(args.output, args.json) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
        OutputFormat::Human => print_posts(&posts),
    }

    Ok(())
}

pub async fn run_create(config: &TourConfig, args: CreateArgs) -> Result<()> {
    if args.title.is_empty() || args.body.is_empty() {
        anyhow::bail!("Both --title and --body must be non-empty");
    }

    let client = build_client(config)?;
    let new_post = NewPost::new(
        args.title,
        args.body,
        args.user_id.unwrap_or(config.widgets.owner_id),
    );

    let created = client
        .create_post(&new_post)
        .await
        .context("Could not create the post")?;
    info!(id = created.id, "created post");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!("Post created successfully! ID: {}", created.id);
    }

    Ok(())
}

pub async fn run_update(config: &TourConfig, args: UpdateArgs) -> Result<()> {
    let client = build_client(config)?;
    let post = Post {
        id: args.id,
        title: args.title,
        body: args.body,
        user_id: args.user_id.unwrap_or(config.widgets.owner_id),
    };

    client
        .update_post(&post)
        .await
        .with_context(|| format!("Could not update post {}", post.id))?;
    info!(id = post.id, "updated post");

    println!("Post updated successfully! ID: {}", post.id);
    Ok(())
}

pub async fn run_delete(config: &TourConfig, args: DeleteArgs) -> Result<()> {
    let confirmer: &dyn Confirm = if args.yes { &AssumeYes } else { &InquireConfirm };
    delete_confirmed(config, args.id, confirmer).await
}

/// Declining sends nothing
async fn delete_confirmed(config: &TourConfig, id: u64, confirmer: &dyn Confirm) -> Result<()> {
    if !confirmer.confirm(DELETE_PROMPT) {
        println!("Cancelled; post {} was not deleted", id);
        return Ok(());
    }

    let client = build_client(config)?;
    client
        .delete_post(id)
        .await
        .with_context(|| format!("Could not delete post {}", id))?;
    info!(id, "deleted post");

    println!("Post deleted successfully! ID: {}", id);
    Ok(())
}
