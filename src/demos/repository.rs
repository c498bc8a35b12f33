//! Repository 模式：資料存取藏在唯讀查詢埠後面，上層服務只依賴埠，
//! 不知道資料來自記憶體、資料庫還是遠端 API。
//!
//! Typical uses: SQL/NoSQL access, REST API clients, any external data
//! source a test wants to mock out.

use crate::console::Console;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

pub trait UserRepository: Send + Sync {
    /// 回傳完整的使用者序列（借用，不複製）。
    fn get_all(&self) -> &[User];

    /// 依 id 線性掃描，取第一筆相符的紀錄；查無結果回傳 None，不是錯誤。
    fn get_by_id(&self, id: u32) -> Option<&User>;
}

/// 固定種子資料的記憶體實作；序列建立後不再變動，id 在序列內唯一。
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "Milton".to_string(),
                },
                User {
                    id: 2,
                    name: "Matias".to_string(),
                },
            ],
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_all(&self) -> &[User] {
        &self.users
    }

    fn get_by_id(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

/// 只做委派的服務層；換一個 UserRepository 實作就換了資料來源。
pub struct UserService<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn list_users(&self) -> &[User] {
        self.repository.get_all()
    }

    pub fn get_user(&self, id: u32) -> Option<&User> {
        self.repository.get_by_id(id)
    }
}

pub fn run<C: Console>(console: C) -> Result<()> {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);

    console.write_line(&serde_json::to_string(&service.get_user(1))?);
    console.write_line(&serde_json::to_string(service.list_users())?);

    Ok(())
}
