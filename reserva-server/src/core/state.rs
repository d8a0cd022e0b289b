//! Server State

use std::sync::Arc;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::SqliteReservationRepository;
use crate::services::ReservationService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// Clone 是浅拷贝，连接池和领域服务都在引用计数之后。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | reservations | Arc<ReservationService> | 预订领域服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    /// 预订领域服务
    pub reservations: Arc<ReservationService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: DbService, reservations: Arc<ReservationService>) -> Self {
        Self {
            config,
            db,
            reservations,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库连接池 (含迁移)
    /// 2. 预订仓储
    /// 3. 预订领域服务
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let repository = Arc::new(SqliteReservationRepository::new(db.pool.clone()));
        let reservations = Arc::new(ReservationService::new(repository));

        Ok(Self::new(config.clone(), db, reservations))
    }
}
