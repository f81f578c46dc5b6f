pub mod relay_client;
pub mod state;
pub mod terminal;

use log::{ error, info, warn };
use std::error::Error;
use tokio::io::{ AsyncBufRead, AsyncBufReadExt, BufReader, Lines };

use crate::cli::ChatArgs;
use crate::models::chat::Message;
use self::relay_client::{ RelayClient, RelayTransport };
use self::state::{ ChatState, Notice, SendRejected, TurnOutcome };
use self::terminal::TerminalView;

const QUIT_COMMAND: &str = "/quit";

/// Presentation side effects of a chat session.
pub trait ChatView: Send {
    /// Called after every change to the conversation or the pending flag.
    /// Implementations keep the newest message in view.
    fn render(&mut self, messages: &[Message], pending: bool);

    fn notify(&mut self, notice: Notice);
}

/// Drives one relay round trip per submission against an owned [`ChatState`].
pub struct ChatSession<T: RelayTransport, V: ChatView> {
    state: ChatState,
    transport: T,
    view: V,
}

impl<T: RelayTransport, V: ChatView> ChatSession<T, V> {
    pub fn new(state: ChatState, transport: T, view: V) -> Self {
        let mut session = Self { state, transport, view };
        session.refresh();
        session
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn refresh(&mut self) {
        self.view.render(self.state.messages(), self.state.is_pending());
    }

    /// Runs a full turn. Errors only when the submission itself is refused;
    /// relay failures come back as a notice and leave the session usable.
    pub async fn send_message(&mut self, text: &str) -> Result<Option<Notice>, SendRejected> {
        let request = self.state.begin_send(text)?;
        self.refresh();

        let outcome = match self.transport.send(&request).await {
            Ok(reply) => TurnOutcome::Reply(reply),
            Err(failure) => {
                error!("Error sending message (session {}): {}", self.state.session_id(), failure);
                TurnOutcome::Failed(failure)
            }
        };

        let notice = self.state.finish_send(outcome);
        self.refresh();
        if let Some(notice) = notice {
            self.view.notify(notice);
        }
        Ok(notice)
    }
}

/// Runs one turn while draining `input`, so lines typed during the pending
/// period are discarded instead of being submitted after the reply arrives.
pub async fn submit_discarding_input<T, V, R>(
    session: &mut ChatSession<T, V>,
    text: &str,
    input: &mut Lines<R>
) -> Result<Option<Notice>, SendRejected>
    where T: RelayTransport, V: ChatView, R: AsyncBufRead + Unpin
{
    let turn = session.send_message(text);
    tokio::pin!(turn);
    let mut input_open = true;

    loop {
        tokio::select! {
            result = &mut turn => return result,
            line = input.next_line(), if input_open => match line {
                Ok(Some(ignored)) => warn!("Input ignored while waiting for a reply: {}", ignored),
                Ok(None) => input_open = false,
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    input_open = false;
                }
            },
        }
    }
}

pub async fn run(args: ChatArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let state = if args.no_greeting { ChatState::new() } else { ChatState::with_greeting() };
    let transport = RelayClient::new(args.relay_url);
    info!("Chat session {} using relay {}", state.session_id(), transport.url());

    let mut session = ChatSession::new(state, transport, TerminalView::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        session.view_mut().prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }
        match submit_discarding_input(&mut session, &line, &mut lines).await {
            Ok(_) | Err(SendRejected::Empty) => {}
            Err(e @ SendRejected::Pending) => error!("{}", e),
        }
    }

    Ok(())
}
