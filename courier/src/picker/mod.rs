//! Forward picker: choose one of the user's conversations and forward a post into it.
//!
//! Lifecycle per open: `Closed → Loading → Ready → Selected → Submitting`, then back
//! to `Closed` on success or `Selected` on failure. Each open starts a new session;
//! results from an earlier session are dropped.
//!
//! Network work is split out into tickets so an embedder can keep handling events
//! while a request is in flight:
//!
//! ```no_run
//! # async fn demo(client: courier::CourierClient, post: courier::Post) -> courier::Result<()> {
//! let mut picker = client.forward_picker()?;
//! let ticket = picker.begin_open(post);
//! let result = ticket.fetch().await;
//! picker.finish_load(ticket, result);
//! # Ok(())
//! # }
//! ```

mod filter;
mod view;

pub use filter::filter_conversations;
pub use view::{ConversationRow, PostPreview, NO_CONTENT};

use std::fmt;
use std::sync::Arc;

use crate::alert::{Alerter, LogAlerter};
use crate::api::MessagingBackend;
use crate::avatar::ImageResolver;
use crate::error::{Error, Result};
use crate::models::{Conversation, ConversationId, ForwardPayload, Post, UserId};
use crate::navigation::{LogNavigator, Navigator, Route};

/// Alert shown when the backend rejects a forward.
pub const FORWARD_FAILED_ALERT: &str = "Failed to forward post. Please try again.";

/// Alert shown when a forward could not be delivered at all.
pub const FORWARD_ERROR_ALERT: &str = "Error forwarding post. Please try again.";

/// Identity and origins a picker works with.
#[derive(Debug, Clone)]
pub struct PickerContext {
    /// The signed-in user; never offered as a forward target.
    pub current_user: UserId,
    /// Origin of the front end, for shareable post links.
    pub app_origin: String,
    /// Resolves participant photos against the backend origin.
    pub images: ImageResolver,
}

/// Where the picker is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not shown; holds no post and no conversations.
    Closed,
    /// Waiting for the conversation list.
    Loading,
    /// List loaded, nothing selected.
    Ready,
    /// A conversation is selected and the forward action is enabled.
    Selected,
    /// A forward request is in flight.
    Submitting,
}

/// Result of a forward attempt.
#[derive(Debug)]
pub enum ForwardOutcome {
    /// Nothing selected or nothing to forward; no request was made.
    Skipped,
    /// Delivered into this conversation. The picker is closed.
    Sent(Conversation),
    /// The attempt failed and the user was alerted. Selection is kept.
    Failed(Error),
    /// The picker was closed or reopened while the request was in flight.
    Stale,
}

/// An in-flight conversation fetch.
pub struct FetchTicket {
    session: u64,
    backend: Arc<dyn MessagingBackend>,
}

impl FetchTicket {
    /// Run the fetch.
    pub async fn fetch(&self) -> Result<Vec<Conversation>> {
        self.backend.list_conversations().await
    }
}

/// An in-flight forward submission.
pub struct ForwardTicket {
    session: u64,
    conversation: Conversation,
    payload: ForwardPayload,
    backend: Arc<dyn MessagingBackend>,
}

impl ForwardTicket {
    /// Payload that will be sent.
    pub fn payload(&self) -> &ForwardPayload {
        &self.payload
    }

    /// Target conversation.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Send the payload.
    pub async fn submit(&self) -> Result<()> {
        self.backend.create_message(&self.payload).await
    }
}

type ForwardCallback = Box<dyn FnMut(&Conversation) + Send>;

/// Searchable conversation picker for forwarding a post.
pub struct ForwardPicker {
    backend: Arc<dyn MessagingBackend>,
    context: PickerContext,
    navigator: Arc<dyn Navigator>,
    alerter: Arc<dyn Alerter>,
    on_forward: Option<ForwardCallback>,
    phase: Phase,
    session: u64,
    post: Option<Post>,
    conversations: Vec<Conversation>,
    filtered: Vec<Conversation>,
    query: String,
    selected: Option<ConversationId>,
}

impl fmt::Debug for ForwardPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardPicker")
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("conversations", &self.conversations.len())
            .field("filtered", &self.filtered.len())
            .field("query", &self.query)
            .field("selected", &self.selected)
            .finish()
    }
}

impl ForwardPicker {
    /// Create a closed picker.
    pub fn new(backend: Arc<dyn MessagingBackend>, context: PickerContext) -> Self {
        Self {
            backend,
            context,
            navigator: Arc::new(LogNavigator),
            alerter: Arc::new(LogAlerter),
            on_forward: None,
            phase: Phase::Closed,
            session: 0,
            post: None,
            conversations: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            selected: None,
        }
    }

    /// Set the navigator used by "view original post".
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Set the alert surface used for forward failures.
    pub fn with_alerter(mut self, alerter: Arc<dyn Alerter>) -> Self {
        self.alerter = alerter;
        self
    }

    /// Set the callback invoked with the target conversation after a successful forward.
    pub fn on_forward(mut self, callback: impl FnMut(&Conversation) + Send + 'static) -> Self {
        self.on_forward = Some(Box::new(callback));
        self
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the picker is shown.
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Whether the conversation list is still loading.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Current search text, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The post being forwarded.
    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    /// Identity and origins in use.
    pub fn context(&self) -> &PickerContext {
        &self.context
    }

    /// Every fetched conversation.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Conversations matching the current query.
    pub fn filtered(&self) -> &[Conversation] {
        &self.filtered
    }

    /// Id of the selected conversation.
    pub fn selected_id(&self) -> Option<&ConversationId> {
        self.selected.as_ref()
    }

    /// The selected conversation.
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let id = self.selected.as_ref()?;
        self.conversations.iter().find(|c| &c.id == id)
    }

    /// Whether the forward action is enabled: a conversation is selected and the
    /// post has an id to link back to.
    pub fn can_forward(&self) -> bool {
        self.phase == Phase::Selected
            && self.post.as_ref().is_some_and(Post::is_linkable)
            && self.selected_conversation().is_some()
    }

    /// Start a new session for `post` and hand back the fetch to run.
    pub fn begin_open(&mut self, post: Post) -> FetchTicket {
        self.reset();
        self.session += 1;
        self.post = Some(post);
        self.phase = Phase::Loading;
        log::debug!("forward picker session {} opened", self.session);

        FetchTicket {
            session: self.session,
            backend: self.backend.clone(),
        }
    }

    /// Apply a fetch result. Returns `false` when the result was stale and dropped.
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<Vec<Conversation>>) -> bool {
        if ticket.session != self.session || self.phase != Phase::Loading {
            log::debug!(
                "dropping conversation fetch for session {} (current {})",
                ticket.session,
                self.session
            );
            return false;
        }

        self.conversations = match result {
            Ok(conversations) => conversations,
            Err(e) => {
                log::error!("Error fetching conversations: {}", e);
                Vec::new()
            }
        };
        self.refilter();
        self.phase = Phase::Ready;
        true
    }

    /// Open for `post` and load conversations.
    pub async fn open(&mut self, post: Post) {
        let ticket = self.begin_open(post);
        let result = ticket.fetch().await;
        self.finish_load(ticket, result);
    }

    /// Update the search text and re-filter.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        if self.phase == Phase::Closed {
            log::debug!("ignoring search on closed picker");
            return;
        }
        self.query = text.into();
        self.refilter();
    }

    /// Make `id` the sole selection.
    pub fn select_conversation(&mut self, id: &ConversationId) -> Result<()> {
        if !matches!(self.phase, Phase::Ready | Phase::Selected) {
            return Err(Error::invalid(format!(
                "cannot select a conversation while {:?}",
                self.phase
            )));
        }

        let conversation = self
            .filtered
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| Error::invalid(format!("conversation {} is not listed", id)))?;

        if !conversation.is_selectable(&self.context.current_user) {
            return Err(Error::invalid(format!(
                "conversation {} has no other participant",
                id
            )));
        }

        self.selected = Some(id.clone());
        self.phase = Phase::Selected;
        Ok(())
    }

    /// Build the forward request for the current selection.
    ///
    /// `Ok(None)` when the action is disabled. An `Err` means the payload could not
    /// be built; the user has already been alerted.
    pub fn begin_forward(&mut self) -> Result<Option<ForwardTicket>> {
        if !self.can_forward() {
            return Ok(None);
        }
        let (Some(post), Some(conversation)) = (self.post.as_ref(), self.selected_conversation())
        else {
            return Ok(None);
        };

        let link = match Route::Post(post.id.clone()).link(&self.context.app_origin) {
            Ok(link) => link,
            Err(e) => {
                log::error!("Error forwarding post: {}", e);
                self.alerter.alert(FORWARD_ERROR_ALERT);
                return Err(e);
            }
        };

        let payload = ForwardPayload::new(conversation.id.clone(), post, link.as_str());
        let ticket = ForwardTicket {
            session: self.session,
            conversation: conversation.clone(),
            payload,
            backend: self.backend.clone(),
        };
        self.phase = Phase::Submitting;
        Ok(Some(ticket))
    }

    /// Apply the outcome of a submission.
    pub fn finish_forward(&mut self, ticket: ForwardTicket, result: Result<()>) -> ForwardOutcome {
        if ticket.session != self.session || self.phase != Phase::Submitting {
            log::debug!(
                "dropping forward result for session {} (current {})",
                ticket.session,
                self.session
            );
            return ForwardOutcome::Stale;
        }

        match result {
            Ok(()) => {
                log::info!(
                    "forwarded post {} to conversation {}",
                    ticket.payload.forwarded_post.post_id,
                    ticket.conversation.id
                );
                if let Some(callback) = self.on_forward.as_mut() {
                    callback(&ticket.conversation);
                }
                self.close();
                ForwardOutcome::Sent(ticket.conversation)
            }
            Err(e) => {
                let message = match e {
                    Error::Api { .. } => {
                        log::error!("Failed to forward post: {}", e);
                        FORWARD_FAILED_ALERT
                    }
                    _ => {
                        log::error!("Error forwarding post: {}", e);
                        FORWARD_ERROR_ALERT
                    }
                };
                self.alerter.alert(message);
                self.phase = Phase::Selected;
                ForwardOutcome::Failed(e)
            }
        }
    }

    /// Forward the post into the selected conversation.
    pub async fn forward(&mut self) -> ForwardOutcome {
        let ticket = match self.begin_forward() {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return ForwardOutcome::Skipped,
            Err(e) => return ForwardOutcome::Failed(e),
        };
        let result = ticket.submit().await;
        self.finish_forward(ticket, result)
    }

    /// Navigate to the post's detail page. Returns whether navigation happened.
    pub fn view_original_post(&self) -> bool {
        match self.post.as_ref().filter(|p| p.is_linkable()) {
            Some(post) => {
                self.navigator.navigate(&Route::Post(post.id.clone()));
                true
            }
            None => false,
        }
    }

    /// Close the picker and clear its state.
    pub fn close(&mut self) {
        self.reset();
        self.session += 1;
        self.phase = Phase::Closed;
    }

    /// Rows to render, in filtered order.
    pub fn rows(&self) -> Vec<ConversationRow> {
        self.filtered
            .iter()
            .filter_map(|c| {
                ConversationRow::build(
                    c,
                    &self.context.current_user,
                    &self.context.images,
                    self.selected.as_ref(),
                )
            })
            .collect()
    }

    /// Preview of the post being forwarded.
    pub fn preview(&self) -> Option<PostPreview> {
        self.post.as_ref().map(PostPreview::from_post)
    }

    fn refilter(&mut self) {
        self.filtered =
            filter_conversations(&self.conversations, &self.query, &self.context.current_user);
    }

    fn reset(&mut self) {
        self.post = None;
        self.conversations.clear();
        self.filtered.clear();
        self.query.clear();
        self.selected = None;
    }
}
