#![allow(dead_code)]

use ud_client::{
    ClientError, ClientResult, LoginResponse, RegisterResponse, RemoteDirectory, RemoteUser,
    UserPage,
};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

pub const FAKE_TOKEN: &str = "QpwL5tke4Pnpja7X4";
pub const FAKE_REGISTERED_ID: i64 = 4;
const PER_PAGE: usize = 6;

/// In-process stand-in for the remote directory that counts every call.
pub struct FakeRemote {
    users: Mutex<Vec<RemoteUser>>,
    offline: AtomicBool,
    login_rejection: Mutex<Option<String>>,
    pub login_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
}

impl FakeRemote {
    pub fn new(users: Vec<RemoteUser>) -> Self {
        Self {
            users: Mutex::new(users),
            offline: AtomicBool::new(false),
            login_rejection: Mutex::new(None),
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails as if the server could not be reached.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Login answers 400 with `{"error": message}`.
    pub fn reject_login(&self, message: &str) {
        *self.login_rejection.lock().unwrap() = Some(message.to_string());
    }

    pub fn replace_users(&self, users: Vec<RemoteUser>) {
        *self.users.lock().unwrap() = users;
    }

    pub fn total_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
            + self.register_calls.load(Ordering::SeqCst)
            + self.list_calls.load(Ordering::SeqCst)
            + self.get_calls.load(Ordering::SeqCst)
    }

    fn check_reachable(&self) -> ClientResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(503, None));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteDirectory for FakeRemote {
    async fn login(&self, email: &str, _password: &str) -> ClientResult<LoginResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        if let Some(message) = self.login_rejection.lock().unwrap().clone() {
            return Err(ClientError::api_error(400, Some(message)));
        }
        if email.is_empty() {
            return Err(ClientError::api_error(
                400,
                Some("Missing email or username".to_string()),
            ));
        }

        Ok(LoginResponse {
            token: FAKE_TOKEN.to_string(),
        })
    }

    async fn register(&self, _email: &str, _password: &str) -> ClientResult<RegisterResponse> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        Ok(RegisterResponse {
            id: FAKE_REGISTERED_ID,
            token: FAKE_TOKEN.to_string(),
        })
    }

    async fn list_users(&self, page: u32) -> ClientResult<UserPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        let users = self.users.lock().unwrap();
        let total = users.len();
        let total_pages = total.div_ceil(PER_PAGE);
        let data = users
            .iter()
            .skip((page.max(1) as usize - 1) * PER_PAGE)
            .take(PER_PAGE)
            .cloned()
            .collect();

        Ok(UserPage {
            page,
            per_page: PER_PAGE as u32,
            total: total as u32,
            total_pages: total_pages as u32,
            data,
        })
    }

    async fn get_user(&self, id: i64) -> ClientResult<RemoteUser> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| ClientError::api_error(404, None))
    }
}
