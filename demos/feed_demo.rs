//! # Reference feed mix
//!
//! Builds a mixer over the reference social-feed weights and mixes a sample
//! of 21 posts drawn round-robin from seven categories.
//!
//! ## Running this demo
//!
//! ```text
//! RUST_LOG=feed_mix=debug cargo run --example feed_demo --features std
//! ```

use feed_mix::post::Post;
use feed_mix::reference::reference_mixer;
use tracing_subscriber::EnvFilter;

fn sample_posts() -> Vec<Post> {
    vec![
        Post::new("chatgpt-generated-corporate-bs", "top/daily"),
        Post::new("ricks-vacation", "following/immediate-follow"),
        Post::new("lisas-puppy", "trending/area"),
        Post::new("theprimagen-shilling-rust", "top/monthly"),
        Post::new("jonass-cold-take", "following/follow-of-follow"),
        Post::new("definetly-a-linux-iso-torrent", "trending/city"),
        Post::new("useless-infographic-definetly-not-stolen-from-linkedin", "promoted"),
        Post::new("coding-humor", "top/daily"),
        Post::new("family-picnic", "following/immediate-follow"),
        Post::new("local-concert-highlights", "trending/area"),
        Post::new("book-recommendations", "top/monthly"),
        Post::new("tech-gadget-review", "following/follow-of-follow"),
        Post::new("art-exhibition-in-city", "trending/city"),
        Post::new("limited-time-offer", "promoted"),
        Post::new("memes-of-the-day", "top/daily"),
        Post::new("weekend-getaway-ideas", "following/immediate-follow"),
        Post::new("community-event-update", "trending/area"),
        Post::new("music-album-release", "top/monthly"),
        Post::new("opinion-poll", "following/follow-of-follow"),
        Post::new("street-food-festival", "trending/city"),
        Post::new("exclusive-discount-code", "promoted"),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mixer = match reference_mixer() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("creating mixer failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Reference feed mix");
    println!("==================\n");

    let posts = sample_posts();
    let quotas = mixer.quotas(mixer.filter_relevant(&posts).len());
    let mut categories: Vec<_> = quotas.iter().collect();
    categories.sort();
    println!("Quotas for {} relevant posts:", posts.len());
    for (category, quota) in categories {
        println!("  {category:<30} {quota}");
    }

    let mixed = mixer.mix(&posts);
    println!("\nMixed feed ({} of {} posts):", mixed.len(), posts.len());
    for post in &mixed {
        println!("  {:<30} {}", post.category, post.id);
    }
}
