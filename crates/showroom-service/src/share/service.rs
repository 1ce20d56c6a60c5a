//! Share code issuance service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use showroom_core::result::AppResult;
use showroom_core::types::LibraryId;
use showroom_database::repositories::ShareCodeRepository;
use showroom_entity::share_code::{CreateShareCode, ShareCode};

use super::code::{CodeGenerator, SHARE_CODE_VALIDITY_DAYS};
use crate::context::RequestContext;

/// Issues share codes for libraries.
#[derive(Debug, Clone)]
pub struct ShareCodeService {
    /// Share code repository.
    share_codes: Arc<ShareCodeRepository>,
    /// Generator for the code text.
    generator: Arc<CodeGenerator>,
}

impl ShareCodeService {
    /// Creates a new share code service.
    pub fn new(share_codes: Arc<ShareCodeRepository>, generator: Arc<CodeGenerator>) -> Self {
        Self {
            share_codes,
            generator,
        }
    }

    /// Issues a code for `library_id`, valid for two days.
    ///
    /// The library is not looked up; a code for a missing library fails
    /// only when redeemed.
    pub async fn issue_code(
        &self,
        ctx: &RequestContext,
        library_id: LibraryId,
    ) -> AppResult<ShareCode> {
        let data = CreateShareCode {
            core_library: library_id,
            code: self.generator.generate(),
            ended_at: Utc::now() + Duration::days(SHARE_CODE_VALIDITY_DAYS),
        };

        let share_code = self.share_codes.create(&data).await?;

        info!(
            user_id = %ctx.user_id,
            library_id = %library_id,
            share_code_id = %share_code.id,
            ended_at = %share_code.ended_at,
            "Share code issued"
        );

        Ok(share_code)
    }
}
