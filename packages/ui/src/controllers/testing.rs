//! Scripted collaborators for controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use api::{
    ApiError, Credentials, LoginResponse, MessageResponse, NewTask, RegisterRequest,
    RegisterResponse, TaskApi, TaskRecord, UserSummary,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::browser::Browser;

/// A request the controller made, with secrets left out.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login {
        username: String,
    },
    Register {
        username: String,
        is_admin: bool,
        with_token: bool,
    },
    ListUsers,
    ChangeRole {
        username: String,
        is_admin: bool,
    },
    DeleteUser(String),
    ResetPassword {
        username: String,
        new_password: String,
    },
    ListTasks,
    CreateTask(NewTask),
}

type Queue<T> = VecDeque<Result<T, ApiError>>;

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    login: Queue<LoginResponse>,
    register: Queue<RegisterResponse>,
    users: Queue<Vec<UserSummary>>,
    change_role: Queue<MessageResponse>,
    delete: Queue<MessageResponse>,
    reset: Queue<MessageResponse>,
    tasks: Queue<Vec<TaskRecord>>,
    create_task: Queue<MessageResponse>,
}

/// [`TaskApi`] that replays queued responses and records every call.
/// An endpoint with nothing queued fails as a network error.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    script: Rc<RefCell<Script>>,
}

fn next<T>(queue: &mut Queue<T>) -> Result<T, ApiError> {
    queue
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network("nothing scripted".to_string())))
}

pub fn ok() -> Result<MessageResponse, ApiError> {
    Ok(MessageResponse::default())
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.borrow().calls.clone()
    }

    pub fn push_login(&self, response: Result<LoginResponse, ApiError>) {
        self.script.borrow_mut().login.push_back(response);
    }

    pub fn push_register(&self, response: Result<RegisterResponse, ApiError>) {
        self.script.borrow_mut().register.push_back(response);
    }

    pub fn push_users(&self, response: Result<Vec<UserSummary>, ApiError>) {
        self.script.borrow_mut().users.push_back(response);
    }

    pub fn push_change_role(&self, response: Result<MessageResponse, ApiError>) {
        self.script.borrow_mut().change_role.push_back(response);
    }

    pub fn push_delete(&self, response: Result<MessageResponse, ApiError>) {
        self.script.borrow_mut().delete.push_back(response);
    }

    pub fn push_reset(&self, response: Result<MessageResponse, ApiError>) {
        self.script.borrow_mut().reset.push_back(response);
    }

    pub fn push_tasks(&self, response: Result<Vec<TaskRecord>, ApiError>) {
        self.script.borrow_mut().tasks.push_back(response);
    }

    pub fn push_create_task(&self, response: Result<MessageResponse, ApiError>) {
        self.script.borrow_mut().create_task.push_back(response);
    }

    fn record(&self, call: Call) {
        self.script.borrow_mut().calls.push(call);
    }
}

impl TaskApi for ScriptedApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login {
            username: credentials.username.clone(),
        });
        next(&mut self.script.borrow_mut().login)
    }

    async fn register(
        &self,
        request: &RegisterRequest,
        token: Option<&str>,
    ) -> Result<RegisterResponse, ApiError> {
        self.record(Call::Register {
            username: request.username.clone(),
            is_admin: request.is_admin,
            with_token: token.is_some(),
        });
        next(&mut self.script.borrow_mut().register)
    }

    async fn list_users(&self, _token: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.record(Call::ListUsers);
        next(&mut self.script.borrow_mut().users)
    }

    async fn change_role(
        &self,
        _token: &str,
        username: &str,
        is_admin: bool,
    ) -> Result<MessageResponse, ApiError> {
        self.record(Call::ChangeRole {
            username: username.to_string(),
            is_admin,
        });
        next(&mut self.script.borrow_mut().change_role)
    }

    async fn delete_user(&self, _token: &str, username: &str) -> Result<MessageResponse, ApiError> {
        self.record(Call::DeleteUser(username.to_string()));
        next(&mut self.script.borrow_mut().delete)
    }

    async fn reset_password(
        &self,
        _token: &str,
        username: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record(Call::ResetPassword {
            username: username.to_string(),
            new_password: new_password.to_string(),
        });
        next(&mut self.script.borrow_mut().reset)
    }

    async fn list_tasks(&self, _token: &str) -> Result<Vec<TaskRecord>, ApiError> {
        self.record(Call::ListTasks);
        next(&mut self.script.borrow_mut().tasks)
    }

    async fn create_task(&self, _token: &str, task: &NewTask) -> Result<MessageResponse, ApiError> {
        self.record(Call::CreateTask(task.clone()));
        next(&mut self.script.borrow_mut().create_task)
    }
}

#[derive(Default)]
struct Dialogs {
    alerts: Vec<String>,
    confirms: Vec<String>,
    prompts: Vec<String>,
    navigations: Vec<String>,
    confirm_answer: bool,
    prompt_answer: Option<String>,
}

/// [`Browser`] that records dialogs and answers them from a script.
/// Confirms are declined and prompts cancelled until told otherwise.
#[derive(Clone, Default)]
pub struct RecordingBrowser {
    dialogs: Rc<RefCell<Dialogs>>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_confirm(&self, answer: bool) {
        self.dialogs.borrow_mut().confirm_answer = answer;
    }

    pub fn set_prompt(&self, answer: Option<&str>) {
        self.dialogs.borrow_mut().prompt_answer = answer.map(str::to_string);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.dialogs.borrow().alerts.clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.dialogs.borrow().confirms.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.dialogs.borrow().prompts.clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.dialogs.borrow().navigations.clone()
    }
}

impl Browser for RecordingBrowser {
    fn alert(&self, message: &str) {
        self.dialogs.borrow_mut().alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut dialogs = self.dialogs.borrow_mut();
        dialogs.confirms.push(message.to_string());
        dialogs.confirm_answer
    }

    fn prompt(&self, message: &str) -> Option<String> {
        let mut dialogs = self.dialogs.borrow_mut();
        dialogs.prompts.push(message.to_string());
        dialogs.prompt_answer.clone()
    }

    fn navigate(&self, path: &str) {
        self.dialogs.borrow_mut().navigations.push(path.to_string());
    }
}

/// Unsigned token whose payload carries the given admin claim.
pub fn token_with_admin(is_admin: bool) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"root","is_admin":{is_admin}}}"#));
    format!("{header}.{payload}.sig")
}

pub fn task(title: &str, owner_id: i64) -> TaskRecord {
    TaskRecord {
        id: None,
        title: title.to_string(),
        description: None,
        done: false,
        is_shared: false,
        owner_id,
        created_at: None,
    }
}

pub fn user(username: &str, is_admin: bool) -> UserSummary {
    UserSummary {
        id: None,
        username: username.to_string(),
        is_admin,
    }
}
