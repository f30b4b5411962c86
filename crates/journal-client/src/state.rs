//! Application state for the front end.
//!
//! All client state lives in [`AppModel`], passed by reference to view
//! code. The compose flow is an explicit state machine:
//! `Idle -> Editing -> (Publishing | SavingDraft) -> Idle`, with
//! `Editing` re-entered when an existing post is opened for editing.

use thiserror::Error;
use uuid::Uuid;

use journal_core::domain::{Post, PostStatus};

/// Authenticated session held by the client.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
}

/// Which screen is showing. Exhaustive - no stringly-typed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The public feed of published posts.
    Feed,
    /// The caller's draft workspace.
    Drafts,
    /// The markdown editor with live preview.
    Editor,
    /// Login / signup forms.
    Login,
    /// A public author profile.
    Profile(Uuid),
}

/// Where the compose flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposePhase {
    Idle,
    Editing,
    Publishing,
    SavingDraft,
}

/// The editor's form fields.
#[derive(Debug, Clone, Default)]
pub struct ComposeForm {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// A save the UI should dispatch to the API, produced by a successful
/// `begin_publish` / `begin_save_draft` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAction {
    /// `Some` when updating an existing post, `None` when creating.
    pub editing: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub status: PostStatus,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Content is required")]
    EmptyContent,

    #[error("No edit in progress")]
    NotEditing,

    #[error("Sign in to write a post")]
    NotAuthenticated,
}

/// Central client state. One instance per running UI.
#[derive(Debug, Default)]
pub struct AppModel {
    /// Last fetched post list.
    pub posts: Vec<Post>,
    session: Option<Session>,
    view: View,
    form: ComposeForm,
    phase: ComposePhase,
    editing: Option<Uuid>,
}

impl Default for View {
    fn default() -> Self {
        View::Feed
    }
}

impl Default for ComposePhase {
    fn default() -> Self {
        ComposePhase::Idle
    }
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn phase(&self) -> ComposePhase {
        self.phase
    }

    pub fn form(&self) -> &ComposeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ComposeForm {
        &mut self.form
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Replace the post list after a fetch.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn show(&mut self, view: View) {
        self.view = view;
    }

    /// Store the session from a successful login and return to the feed.
    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.view = View::Feed;
    }

    /// Drop the session and any in-progress edit.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.form = ComposeForm::default();
        self.phase = ComposePhase::Idle;
        self.editing = None;
        self.view = View::Feed;
    }

    /// Open a blank editor. Requires a session.
    pub fn start_compose(&mut self) -> Result<(), ComposeError> {
        if self.session.is_none() {
            return Err(ComposeError::NotAuthenticated);
        }
        self.form = ComposeForm::default();
        self.editing = None;
        self.phase = ComposePhase::Editing;
        self.view = View::Editor;
        Ok(())
    }

    /// Re-enter editing on an existing post, pre-populating the form
    /// from its current field values.
    pub fn edit_post(&mut self, post: &Post) -> Result<(), ComposeError> {
        if self.session.is_none() {
            return Err(ComposeError::NotAuthenticated);
        }
        self.form = ComposeForm {
            title: post.title.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
        };
        self.editing = Some(post.id);
        self.phase = ComposePhase::Editing;
        self.view = View::Editor;
        Ok(())
    }

    /// Transition `Editing -> Publishing` and hand back the save to run.
    pub fn begin_publish(&mut self) -> Result<SaveAction, ComposeError> {
        self.begin_save(PostStatus::Published)
    }

    /// Transition `Editing -> SavingDraft` and hand back the save to run.
    pub fn begin_save_draft(&mut self) -> Result<SaveAction, ComposeError> {
        self.begin_save(PostStatus::Draft)
    }

    fn begin_save(&mut self, status: PostStatus) -> Result<SaveAction, ComposeError> {
        if self.phase != ComposePhase::Editing {
            return Err(ComposeError::NotEditing);
        }
        if self.form.title.trim().is_empty() {
            return Err(ComposeError::EmptyTitle);
        }
        if self.form.content.trim().is_empty() {
            return Err(ComposeError::EmptyContent);
        }

        self.phase = match status {
            PostStatus::Published => ComposePhase::Publishing,
            PostStatus::Draft => ComposePhase::SavingDraft,
        };

        Ok(SaveAction {
            editing: self.editing,
            title: self.form.title.clone(),
            content: self.form.content.clone(),
            image_url: self.form.image_url.clone(),
            status,
        })
    }

    /// The save landed: clear the editor and return to the feed.
    pub fn save_succeeded(&mut self) {
        self.form = ComposeForm::default();
        self.editing = None;
        self.phase = ComposePhase::Idle;
        self.view = View::Feed;
    }

    /// The save failed: keep the form so nothing is lost.
    pub fn save_failed(&mut self) {
        self.phase = ComposePhase::Editing;
    }

    /// Published posts for the public feed view.
    pub fn published_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
    }

    /// The signed-in user's drafts.
    pub fn my_drafts(&self) -> impl Iterator<Item = &Post> {
        let me = self.session.as_ref().map(|s| s.user_id);
        self.posts
            .iter()
            .filter(move |p| p.status == PostStatus::Draft && Some(p.author) == me)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user_id: Uuid::new_v4(),
            username: "amy".to_string(),
        }
    }

    fn post(author: Uuid, status: PostStatus) -> Post {
        Post::new(
            author,
            "amy".to_string(),
            "Hi".to_string(),
            "World".to_string(),
            None,
            status,
        )
        .unwrap()
    }

    #[test]
    fn test_compose_requires_session() {
        let mut model = AppModel::new();
        assert_eq!(
            model.start_compose(),
            Err(ComposeError::NotAuthenticated)
        );
    }

    #[test]
    fn test_compose_flow_publish() {
        let mut model = AppModel::new();
        model.sign_in(session());

        model.start_compose().unwrap();
        assert_eq!(model.view(), View::Editor);
        assert_eq!(model.phase(), ComposePhase::Editing);

        model.form_mut().title = "Hi".to_string();
        model.form_mut().content = "World".to_string();

        let action = model.begin_publish().unwrap();
        assert_eq!(model.phase(), ComposePhase::Publishing);
        assert!(action.editing.is_none());
        assert_eq!(action.status, PostStatus::Published);

        model.save_succeeded();
        assert_eq!(model.phase(), ComposePhase::Idle);
        assert_eq!(model.view(), View::Feed);
        assert!(model.form().title.is_empty());
    }

    #[test]
    fn test_begin_save_validates_form() {
        let mut model = AppModel::new();
        model.sign_in(session());
        model.start_compose().unwrap();

        assert_eq!(model.begin_publish(), Err(ComposeError::EmptyTitle));

        model.form_mut().title = "Hi".to_string();
        model.form_mut().content = "   ".to_string();
        assert_eq!(model.begin_save_draft(), Err(ComposeError::EmptyContent));

        // Still editing after a failed validation
        assert_eq!(model.phase(), ComposePhase::Editing);
    }

    #[test]
    fn test_begin_save_outside_editing() {
        let mut model = AppModel::new();
        model.sign_in(session());
        assert_eq!(model.begin_publish(), Err(ComposeError::NotEditing));
    }

    #[test]
    fn test_edit_post_prepopulates_form() {
        let mut model = AppModel::new();
        let sess = session();
        let author = sess.user_id;
        model.sign_in(sess);

        let existing = post(author, PostStatus::Published);
        model.edit_post(&existing).unwrap();

        assert_eq!(model.form().title, "Hi");
        assert_eq!(model.form().content, "World");

        let action = model.begin_save_draft().unwrap();
        assert_eq!(action.editing, Some(existing.id));
        assert_eq!(action.status, PostStatus::Draft);
    }

    #[test]
    fn test_save_failed_returns_to_editing() {
        let mut model = AppModel::new();
        model.sign_in(session());
        model.start_compose().unwrap();
        model.form_mut().title = "Hi".to_string();
        model.form_mut().content = "World".to_string();

        model.begin_publish().unwrap();
        model.save_failed();

        assert_eq!(model.phase(), ComposePhase::Editing);
        assert_eq!(model.form().title, "Hi");
    }

    #[test]
    fn test_feed_and_draft_filters() {
        let mut model = AppModel::new();
        let sess = session();
        let me = sess.user_id;
        let other = Uuid::new_v4();
        model.sign_in(sess);

        model.set_posts(vec![
            post(me, PostStatus::Published),
            post(me, PostStatus::Draft),
            post(other, PostStatus::Draft),
        ]);

        assert_eq!(model.published_posts().count(), 1);
        // Only my own drafts show in the drafts workspace
        assert_eq!(model.my_drafts().count(), 1);
    }

    #[test]
    fn test_sign_out_clears_edit_state() {
        let mut model = AppModel::new();
        model.sign_in(session());
        model.start_compose().unwrap();
        model.form_mut().title = "Hi".to_string();

        model.sign_out();

        assert!(model.session().is_none());
        assert_eq!(model.phase(), ComposePhase::Idle);
        assert!(model.form().title.is_empty());
        assert_eq!(model.view(), View::Feed);
    }
}
