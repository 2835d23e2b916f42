use blog_comments::{
    domain::{
        comment::{
            entity::{Comment, ModerationStatus},
            thread::build_tree,
        },
        shared::pagination::PageRequest,
    },
    infrastructure::security::profanity_filter::{ProfanityFilter, check_profanity},
};
use chrono::{Duration, TimeZone, Utc};

fn comment(id: i64, parent_id: Option<i64>, minute: i64) -> Comment {
    Comment {
        id,
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minute),
        message: format!("comment {}", id),
        alias: "Velvet Comet".to_string(),
        parent_id,
        article_slug: "rust-tips".to_string(),
        moderation_status: ModerationStatus::Ok,
        hide_publicity: false,
        moderation_reason: None,
        last_moderated_at: None,
    }
}

#[test]
fn tree_keeps_every_comment_exactly_once() {
    let rows = vec![
        comment(6, Some(2), 6),
        comment(5, Some(5), 5),
        comment(4, Some(3), 4),
        comment(3, Some(4), 3),
        comment(2, None, 2),
        comment(1, Some(99), 1),
    ];

    fn collect(nodes: &[blog_comments::domain::comment::entity::CommentNode], out: &mut Vec<i64>) {
        for node in nodes {
            out.push(node.comment.id);
            collect(&node.children, out);
        }
    }

    let tree = build_tree(rows);
    let mut seen = Vec::new();
    collect(&tree, &mut seen);
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(tree[0].comment.id, 2);
    assert_eq!(tree[0].children[0].comment.id, 6);
}

#[test]
fn empty_input_builds_empty_tree() {
    assert!(build_tree(Vec::new()).is_empty());
}

#[test]
fn profanity_masks_whole_words_only() {
    let check = check_profanity("Damn, the class assignment was hard");
    assert!(check.is_profane);
    assert_eq!(check.cleaned_text, "****, the class assignment was hard");

    assert!(!check_profanity("Classic assessment of the assassin's creed").is_profane);
}

#[test]
fn profanity_filter_can_be_tuned() {
    let mut filter = ProfanityFilter::default();
    assert!(!filter.has_profanity("please abort the build"));
    filter.add_words(["abort"]);
    assert!(filter.has_profanity("please ABORT the build"));
    filter.remove_words(["abort"]);
    assert!(!filter.has_profanity("please abort the build"));
}

#[test]
fn pagination_defaults_are_safe_and_stable() {
    let p = PageRequest::default();
    assert_eq!(p.page, 1);
    assert_eq!(p.limit, 10);
    assert_eq!(p.offset(), 0);

    let p = PageRequest::new(Some(3), Some(25));
    assert_eq!(p.offset(), 50);
}
