//! Comment thread shown under a recipe.
//!
//! Each comment carries a reaction from the current viewer: neutral, liked
//! or disliked. Reacting toggles or swaps that state and adjusts the counters
//! in the same step, so the counters never drift from the reactions applied.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::Session;

/// Display time for a comment submitted in this session.
pub const JUST_NOW: &str = "just now";

/// Author shown when the viewer is not signed in.
pub const ANONYMOUS_AUTHOR: &str = "Current User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub time: String,
    pub likes: u32,
    pub dislikes: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    #[default]
    Neutral,
    Liked,
    Disliked,
}

/// Emitted when the viewer reports a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReport {
    pub comment_id: Uuid,
    pub reporter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommentThread {
    comments: Vec<Comment>,
    reactions: HashMap<Uuid, Reaction>,
    open_menu: Option<Uuid>,
    viewer: Option<String>,
}

impl CommentThread {
    pub fn new(initial: Vec<Comment>, session: &Session) -> Self {
        Self {
            comments: initial,
            reactions: HashMap::new(),
            open_menu: None,
            viewer: session.user_id().map(str::to_string),
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn get(&self, id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn reaction(&self, id: Uuid) -> Reaction {
        self.reactions.get(&id).copied().unwrap_or_default()
    }

    /// Post a new top-level comment at the top of the list.
    /// Blank text is ignored.
    pub fn submit(&mut self, text: &str) -> Option<&Comment> {
        if text.trim().is_empty() {
            return None;
        }
        let comment = Comment {
            id: Uuid::new_v4(),
            author: self
                .viewer
                .clone()
                .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
            text: text.to_string(),
            time: JUST_NOW.to_string(),
            likes: 0,
            dislikes: 0,
        };
        self.comments.insert(0, comment);
        self.comments.first()
    }

    pub fn like(&mut self, id: Uuid) -> Reaction {
        self.react(id, Reaction::Liked)
    }

    pub fn dislike(&mut self, id: Uuid) -> Reaction {
        self.react(id, Reaction::Disliked)
    }

    /// Apply a like or dislike and return the viewer's new reaction.
    /// Unknown ids are ignored.
    fn react(&mut self, id: Uuid, pressed: Reaction) -> Reaction {
        let current = self.reaction(id);
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) else {
            return current;
        };

        let next = if current == pressed {
            Reaction::Neutral
        } else {
            pressed
        };

        match current {
            Reaction::Liked => comment.likes = comment.likes.saturating_sub(1),
            Reaction::Disliked => comment.dislikes = comment.dislikes.saturating_sub(1),
            Reaction::Neutral => {}
        }
        match next {
            Reaction::Liked => comment.likes += 1,
            Reaction::Disliked => comment.dislikes += 1,
            Reaction::Neutral => {}
        }

        if next == Reaction::Neutral {
            self.reactions.remove(&id);
        } else {
            self.reactions.insert(id, next);
        }
        next
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        self.open_menu = None;
        let before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        self.reactions.remove(&id);
        self.comments.len() != before
    }

    pub fn report(&mut self, id: Uuid) -> Option<CommentReport> {
        self.open_menu = None;
        self.get(id)?;
        tracing::info!("Comment {} reported", id);
        Some(CommentReport {
            comment_id: id,
            reporter: self.viewer.clone(),
        })
    }

    /// Open the action menu for a comment, or close it if it is already open.
    /// At most one menu is open at a time.
    pub fn toggle_menu(&mut self, id: Uuid) {
        self.open_menu = if self.open_menu == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Any interaction outside the open menu closes it.
    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    pub fn open_menu(&self) -> Option<Uuid> {
        self.open_menu
    }

    pub fn is_menu_open(&self, id: Uuid) -> bool {
        self.open_menu == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn comment(likes: u32, dislikes: u32) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            author: "Rumeysa".to_string(),
            text: "Lovely with pistachios".to_string(),
            time: "2 days ago".to_string(),
            likes,
            dislikes,
        }
    }

    fn thread_with(c: &Comment) -> CommentThread {
        CommentThread::new(vec![c.clone()], &Session::anonymous())
    }

    #[test]
    fn test_like_toggles() {
        let c = comment(5, 2);
        let mut thread = thread_with(&c);

        assert_eq!(thread.like(c.id), Reaction::Liked);
        assert_eq!(thread.get(c.id).unwrap().likes, 6);

        assert_eq!(thread.like(c.id), Reaction::Neutral);
        assert_eq!(thread.get(c.id).unwrap().likes, 5);
    }

    #[test]
    fn test_like_swaps_dislike() {
        let c = comment(5, 2);
        let mut thread = thread_with(&c);

        thread.dislike(c.id);
        assert_eq!(thread.get(c.id).unwrap().dislikes, 3);

        assert_eq!(thread.like(c.id), Reaction::Liked);
        let updated = thread.get(c.id).unwrap();
        assert_eq!((updated.likes, updated.dislikes), (6, 2));

        assert_eq!(thread.dislike(c.id), Reaction::Disliked);
        let updated = thread.get(c.id).unwrap();
        assert_eq!((updated.likes, updated.dislikes), (5, 3));
    }

    #[test]
    fn test_counters_track_any_press_sequence() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..200 {
            let (base_likes, base_dislikes) = (rng.random_range(0..5), rng.random_range(0..5));
            let c = comment(base_likes, base_dislikes);
            let mut thread = thread_with(&c);
            let mut expected = Reaction::Neutral;

            for _ in 0..rng.random_range(0..30) {
                let like = rng.random_bool(0.5);
                let pressed = if like { Reaction::Liked } else { Reaction::Disliked };
                expected = if expected == pressed {
                    Reaction::Neutral
                } else {
                    pressed
                };
                let got = if like {
                    thread.like(c.id)
                } else {
                    thread.dislike(c.id)
                };
                assert_eq!(got, expected);
                assert_eq!(thread.reaction(c.id), expected);

                let current = thread.get(c.id).unwrap();
                let liked = u32::from(expected == Reaction::Liked);
                let disliked = u32::from(expected == Reaction::Disliked);
                assert_eq!(current.likes, base_likes + liked);
                assert_eq!(current.dislikes, base_dislikes + disliked);
            }
        }
    }

    #[test]
    fn test_unknown_comment_is_ignored() {
        let c = comment(1, 1);
        let mut thread = thread_with(&c);
        let stranger = Uuid::new_v4();
        assert_eq!(thread.like(stranger), Reaction::Neutral);
        assert_eq!(thread.reaction(stranger), Reaction::Neutral);
        assert_eq!(thread.comments(), &[c]);
    }

    #[test]
    fn test_submit_prepends() {
        let c = comment(3, 0);
        let mut thread = CommentThread::new(
            vec![c.clone()],
            &Session::signed_in("user@gmail.com", Role::User),
        );
        assert!(thread.submit("   ").is_none());

        let posted = thread.submit("Made this tonight!").unwrap().clone();
        assert_eq!(posted.author, "user@gmail.com");
        assert_eq!(posted.time, JUST_NOW);
        assert_eq!((posted.likes, posted.dislikes), (0, 0));
        assert_eq!(thread.comments()[0].id, posted.id);
        assert_eq!(thread.comments()[1].id, c.id);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let a = comment(0, 0);
        let b = comment(0, 0);
        let mut thread = CommentThread::new(vec![a.clone(), b.clone()], &Session::anonymous());

        thread.toggle_menu(a.id);
        assert!(thread.is_menu_open(a.id));
        thread.toggle_menu(b.id);
        assert!(!thread.is_menu_open(a.id));
        assert!(thread.is_menu_open(b.id));
        thread.toggle_menu(b.id);
        assert_eq!(thread.open_menu(), None);

        thread.toggle_menu(a.id);
        thread.close_menu();
        assert_eq!(thread.open_menu(), None);
    }

    #[test]
    fn test_delete_and_report_close_menu() {
        let a = comment(0, 0);
        let b = comment(0, 0);
        let mut thread = CommentThread::new(vec![a.clone(), b.clone()], &Session::anonymous());

        thread.toggle_menu(a.id);
        let report = thread.report(a.id).unwrap();
        assert_eq!(report.comment_id, a.id);
        assert_eq!(thread.open_menu(), None);

        thread.toggle_menu(b.id);
        assert!(thread.delete(b.id));
        assert_eq!(thread.open_menu(), None);
        assert_eq!(thread.comments().len(), 1);
        assert!(!thread.delete(b.id));
        assert!(thread.report(b.id).is_none());
    }
}
