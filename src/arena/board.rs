use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::spam::looks_like_spam;

/// 아이디어 본문 최대 길이. UTF-16 코드 유닛으로 센다(이모지 하나는 2).
pub const MAX_IDEA_CHARS: usize = 900;

/// 이름을 비워 두었을 때 쓰는 작성자 이름.
pub const ANONYMOUS: &str = "anon";

/// 게시판에 올라간 아이디어 한 건. 미러로 보낼 때 그대로 직렬화한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub text: String,
    pub name: String,
    /// 표시용 시각("YYYY-MM-DD HH:MM", 로컬)
    pub ts: String,
    pub up: u32,
    /// 작성 시각(ms). 기본 제공 아이디어에는 없다.
    pub created_ms: Option<i64>,
}

/// 게시 요청이 거부된 이유.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("idea text is empty")]
    Empty,
    #[error("idea is {len} characters; keep it under {max}")]
    TooLong { len: usize, max: usize },
    #[error("idea was rejected by the spam filter")]
    Spam,
}

/// 외부 공개 저장소 호출 실패.
#[derive(Debug, Error)]
#[error("mirror publish failed: {0}")]
pub struct MirrorError(pub String);

/// 게시판 공개 저장소. 구현은 외부에서 주입한다.
pub trait IdeaMirror {
    fn publish(&self, idea: &Idea) -> Result<(), MirrorError>;
}

/// 게시판 동작 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaMode {
    Local,
    Public,
}

impl ArenaMode {
    pub fn label(&self) -> &'static str {
        match self {
            ArenaMode::Local => "LOCAL",
            ArenaMode::Public => "PUBLIC",
        }
    }
}

/// 정렬 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Hot,
    New,
    Top,
}

fn new_idea_id() -> String {
    format!("i_{}", Uuid::now_v7().simple())
}

fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// 로컬 우선 아이디어 게시판.
pub struct IdeaBoard {
    ideas: Vec<Idea>,
    mirror: Option<Box<dyn IdeaMirror>>,
    mode: ArenaMode,
}

impl Default for IdeaBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaBoard {
    /// 기본 제공 아이디어 두 건으로 시작한다.
    pub fn new() -> Self {
        let ts = now_stamp();
        let seed = |text: &str, up| Idea {
            id: new_idea_id(),
            text: text.to_string(),
            name: ANONYMOUS.to_string(),
            ts: ts.clone(),
            up,
            created_ms: None,
        };
        let ideas = vec![
            seed(
                "PCM walls as thermal batteries to shave peak training heat loads.",
                7,
            ),
            seed(
                "Thermal-aware job scheduler that migrates workloads based on live hotspot maps.",
                5,
            ),
        ];
        Self::with_ideas(ideas)
    }

    /// 주어진 목록으로 게시판을 만든다.
    pub fn with_ideas(ideas: Vec<Idea>) -> Self {
        Self {
            ideas,
            mirror: None,
            mode: ArenaMode::Local,
        }
    }

    /// 공개 저장소를 연결한다. 연결되면 PUBLIC 모드가 된다.
    pub fn attach_mirror(&mut self, mirror: Box<dyn IdeaMirror>) {
        self.mirror = Some(mirror);
        self.mode = ArenaMode::Public;
    }

    pub fn mode(&self) -> ArenaMode {
        self.mode
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn get(&self, id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|i| i.id == id)
    }

    /// 아이디어를 검증 후 맨 앞에 추가한다.
    ///
    /// 공개 저장소 실패는 게시 자체를 실패시키지 않고 LOCAL 모드로 되돌린다.
    pub fn submit(&mut self, text: &str, name: &str) -> Result<&Idea, SubmitError> {
        let text = text.trim();
        let name = name.trim();
        if text.is_empty() {
            return Err(SubmitError::Empty);
        }
        let len = text.encode_utf16().count();
        if len > MAX_IDEA_CHARS {
            return Err(SubmitError::TooLong {
                len,
                max: MAX_IDEA_CHARS,
            });
        }
        if looks_like_spam(text) {
            tracing::debug!("idea rejected by spam filter");
            return Err(SubmitError::Spam);
        }

        let idea = Idea {
            id: new_idea_id(),
            text: text.to_string(),
            name: if name.is_empty() { ANONYMOUS } else { name }.to_string(),
            ts: now_stamp(),
            up: 0,
            created_ms: Some(Utc::now().timestamp_millis()),
        };
        tracing::info!(id = %idea.id, "idea submitted");

        if let Some(mirror) = &self.mirror {
            match mirror.publish(&idea) {
                Ok(()) => self.mode = ArenaMode::Public,
                Err(e) => {
                    tracing::warn!(error = %e, "falling back to local idea board");
                    self.mode = ArenaMode::Local;
                }
            }
        }

        self.ideas.insert(0, idea);
        Ok(&self.ideas[0])
    }

    /// 추천 수를 1 올린다. 없는 id면 `None`.
    pub fn upvote(&mut self, id: &str) -> Option<u32> {
        let idea = self.ideas.iter_mut().find(|i| i.id == id)?;
        idea.up += 1;
        Some(idea.up)
    }

    /// 정렬된 목록을 돌려준다. 같은 값끼리는 원래 순서를 유지한다.
    pub fn sorted(&self, sort: SortMode) -> Vec<&Idea> {
        let mut list: Vec<&Idea> = self.ideas.iter().collect();
        match sort {
            SortMode::New => list.sort_by_key(|i| std::cmp::Reverse(i.created_ms.unwrap_or(0))),
            SortMode::Top => list.sort_by_key(|i| std::cmp::Reverse(i.up)),
            // 현재는 추천 수 가중치만 반영한다
            SortMode::Hot => list.sort_by_key(|i| std::cmp::Reverse(u64::from(i.up) * 2)),
        }
        list
    }
}
