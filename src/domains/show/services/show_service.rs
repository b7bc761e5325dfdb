use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::domains::seatmap::models::SeatMapSection;
use crate::domains::show::models::{
    LocationRequest, ScheduleInfo, SeatPriceInfo, ShowCreate, ShowCreateRequest,
    ShowCreateResponse, ShowDeleteResponse, ShowDetailResponse, ShowListRequest, ShowListResponse,
    ShowSaleStatusUpdateRequest, ShowSaleStatusUpdateResponse, ShowScheduleCreate,
    ShowUpdateRequest, ShowUpdateResponse, Venue,
};
use crate::shared::database::{
    Database, ReservationRepository, ScheduleRepository, SeatMapRepository, ShowRepository,
    VenueRepository,
};
use crate::shared::errors::AdminError;
use crate::shared::models::{
    Genre, PageRequest, PageResponse, Region, ScheduleStatus, ShowStatus,
};

/// 공연 관리 서비스
/// Admin show service
///
/// 수정 규칙:
/// - WAITING 상태에서는 모든 필드 수정 가능
/// - 판매 시작 이후에는 장르/장소/판매 시작일이 잠김
/// - 예매가 참조하는 일정은 수정/삭제 불가 (추가는 허용)
#[derive(Clone)]
pub struct ShowService {
    db: Database,
}

impl ShowService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 공연 목록 조회 (필터 + 페이징)
    /// List shows with filters and pagination
    pub async fn get_show_list(
        &self,
        filters: ShowListRequest,
        page: PageRequest,
    ) -> Result<PageResponse<ShowListResponse>, AdminError> {
        let show_repo = ShowRepository::new(self.db.pool().clone());
        let venue_repo = VenueRepository::new(self.db.pool().clone());
        let schedule_repo = ScheduleRepository::new(self.db.pool().clone());

        let keyword = filters.keyword.as_deref();

        let shows = show_repo
            .list(
                filters.show_status,
                filters.sale_status,
                keyword,
                filters.start_date,
                filters.end_date,
                page.limit(),
                page.offset(),
            )
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to list shows: {}", e)))?;

        let total = show_repo
            .count(
                filters.show_status,
                filters.sale_status,
                keyword,
                filters.start_date,
                filters.end_date,
            )
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to count shows: {}", e)))?;

        let mut content = Vec::with_capacity(shows.len());
        for show in shows {
            let venue = venue_repo
                .find_by_id(show.venue_id)
                .await
                .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch venue: {}", e)))?;

            let first_schedule = schedule_repo
                .find_by_show_id_ordered(show.id)
                .await
                .map_err(|e| {
                    AdminError::DatabaseError(format!("Failed to fetch schedules: {}", e))
                })?
                .into_iter()
                .next();

            let first_schedule_date = first_schedule
                .map(|s| NaiveDateTime::new(s.show_date, s.show_time).and_utc());

            content.push(ShowListResponse {
                id: show.id,
                title: show.title,
                genre: show.genre,
                status: show.status,
                sale_status: show.sale_status,
                venue: venue.as_ref().map(|v| v.name.clone()),
                region: venue.as_ref().map(|v| v.region),
                first_schedule_date,
                sale_start_date: show.sale_start_date,
                sale_end_date: show.sale_end_date,
            });
        }

        Ok(PageResponse::new(content, page, total))
    }

    /// 공연 상세 조회
    /// Show detail with schedules, seat counts and section prices
    pub async fn get_show_detail(&self, id: i64) -> Result<ShowDetailResponse, AdminError> {
        let show_repo = ShowRepository::new(self.db.pool().clone());
        let venue_repo = VenueRepository::new(self.db.pool().clone());
        let schedule_repo = ScheduleRepository::new(self.db.pool().clone());
        let reservation_repo = ReservationRepository::new(self.db.pool().clone());
        let seat_map_repo = SeatMapRepository::new(self.db.pool().clone());

        let show = show_repo
            .find_by_id_and_not_deleted(id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch show: {}", e)))?
            .ok_or(AdminError::ShowNotFound)?;

        let venue = venue_repo
            .find_by_id(show.venue_id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch venue: {}", e)))?;

        let total_seats = venue
            .as_ref()
            .and_then(|v| v.total_seats)
            .unwrap_or(0) as i64;

        // 스케줄 정보 구성 (잔여석 = 전체 좌석 - 예매 수)
        let schedules = schedule_repo
            .find_by_show_id_ordered(id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch schedules: {}", e)))?;

        let mut schedule_infos = Vec::with_capacity(schedules.len());
        for schedule in schedules {
            let reservation_count = reservation_repo
                .count_by_schedule_id(schedule.id)
                .await
                .map_err(|e| {
                    AdminError::DatabaseError(format!("Failed to count reservations: {}", e))
                })?;

            schedule_infos.push(ScheduleInfo {
                schedule_id: schedule.id,
                show_date: schedule.show_date,
                show_time: schedule.show_time,
                ticket_open_time: schedule.ticket_open_time,
                remaining_seats: total_seats - reservation_count,
                total_seats,
                reservation_count,
            });
        }

        // 좌석 가격 정보 구성 (좌석배치도의 구역 문서에서 파생)
        let mut seat_prices = Vec::new();
        if let Some(seat_map_id) = show.seat_map_id {
            let seat_map = seat_map_repo
                .find_by_id(seat_map_id)
                .await
                .map_err(|e| {
                    AdminError::DatabaseError(format!("Failed to fetch seat map: {}", e))
                })?;

            if let Some(seat_map) = seat_map {
                let sections: Vec<SeatMapSection> =
                    serde_json::from_value(seat_map.sections).unwrap_or_default();

                seat_prices = sections
                    .into_iter()
                    .map(|section| SeatPriceInfo {
                        section_id: section.section_id,
                        section_name: section.name,
                        price: section.price,
                    })
                    .collect();
            }
        }

        Ok(ShowDetailResponse {
            id: show.id,
            title: show.title,
            genre: show.genre,
            venue_name: venue.as_ref().map(|v| v.name.clone()),
            hall_name: venue.as_ref().map(|v| v.hall_name.clone()),
            region: venue.as_ref().map(|v| v.region),
            running_time: show.running_time,
            poster_url: show.poster_url,
            detail_image_urls: show.detail_image_urls,
            cast: show.cast_members,
            status: show.status,
            sale_status: show.sale_status,
            sale_start_date: show.sale_start_date,
            sale_end_date: show.sale_end_date,
            schedules: schedule_infos,
            seat_prices,
            created_at: show.created_at,
            updated_at: show.updated_at,
        })
    }

    /// 공연 등록
    /// 첫/마지막 공연일은 일정에서 파생, 판매 종료는 마지막 공연일 23:59:59
    /// Create a show; derives start/end dates from the schedule list
    pub async fn create_show(
        &self,
        request: ShowCreateRequest,
    ) -> Result<ShowCreateResponse, AdminError> {
        let show_repo = ShowRepository::new(self.db.pool().clone());
        let schedule_repo = ScheduleRepository::new(self.db.pool().clone());

        let genre = parse_genre(&request.genre)?;
        let (venue, seat_map_id) = self.resolve_location(&request.location).await?;

        let first_show_date = request
            .schedules
            .iter()
            .map(|s| s.show_date)
            .min()
            .ok_or(AdminError::SchedulesRequired)?;
        let last_show_date = request
            .schedules
            .iter()
            .map(|s| s.show_date)
            .max()
            .ok_or(AdminError::SchedulesRequired)?;

        // 시간 문자열은 저장 전에 전부 검증
        let mut parsed_schedules = Vec::with_capacity(request.schedules.len());
        for schedule in &request.schedules {
            parsed_schedules.push((schedule, parse_show_time(&schedule.show_time)?));
        }

        let sale_start_date = request
            .booking_period
            .start_date
            .and_time(NaiveTime::MIN)
            .and_utc();
        // 마지막 공연일 23:59:59
        let sale_end_date = (last_show_date.and_time(NaiveTime::MIN) + Duration::days(1)
            - Duration::seconds(1))
        .and_utc();

        let show = show_repo
            .create(ShowCreate {
                venue_id: venue.id,
                title: request.title,
                genre,
                running_time: request.running_time,
                cast_members: request.cast,
                start_date: first_show_date,
                end_date: last_show_date,
                sale_start_date,
                sale_end_date,
                seat_map_id,
            })
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to create show: {}", e)))?;

        for (schedule, show_time) in parsed_schedules {
            schedule_repo
                .create(ShowScheduleCreate {
                    show_id: show.id,
                    show_date: schedule.show_date,
                    show_time,
                    ticket_open_time: schedule.ticket_open_time,
                    status: ScheduleStatus::BeforeOpen,
                })
                .await
                .map_err(|e| {
                    AdminError::DatabaseError(format!("Failed to create schedule: {}", e))
                })?;
        }

        tracing::info!("공연 등록: id={}, title={}", show.id, show.title);

        Ok(ShowCreateResponse {
            show_id: show.id,
            message: "공연이 등록되었습니다".to_string(),
        })
    }

    /// 공연 수정
    ///
    /// WAITING 상태: 전체 수정 가능
    /// 판매 시작 이후: 장르/장소/판매 시작일 수정 불가,
    /// 예매가 참조하는 일정은 수정/삭제 불가 (추가는 허용)
    pub async fn update_show(
        &self,
        id: i64,
        request: ShowUpdateRequest,
    ) -> Result<ShowUpdateResponse, AdminError> {
        let show_repo = ShowRepository::new(self.db.pool().clone());
        let schedule_repo = ScheduleRepository::new(self.db.pool().clone());
        let reservation_repo = ReservationRepository::new(self.db.pool().clone());

        let mut show = show_repo
            .find_by_id_and_not_deleted(id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch show: {}", e)))?
            .ok_or(AdminError::ShowNotFound)?;

        let editable = show.gated_fields_editable();

        // 판매 시작 이후 잠기는 필드 검사
        if !editable {
            if request.genre.is_some() {
                return Err(AdminError::ImmutableField { field: "장르" });
            }
            if request.location.is_some() {
                return Err(AdminError::ImmutableField { field: "장소" });
            }
            if request.sale_start_date.is_some() {
                return Err(AdminError::ImmutableField { field: "판매 시작일" });
            }
        }

        if let Some(title) = request.title {
            show.title = title;
        }
        if let Some(genre) = &request.genre {
            show.genre = parse_genre(genre)?;
        }
        if let Some(location) = &request.location {
            let (venue, seat_map_id) = self.resolve_location(location).await?;
            show.venue_id = venue.id;
            show.seat_map_id = seat_map_id;
        }
        if let Some(running_time) = request.running_time {
            show.running_time = running_time;
        }
        if let Some(cast) = request.cast {
            show.cast_members = Some(cast);
        }
        if let Some(poster_url) = request.poster_url {
            show.poster_url = Some(poster_url);
        }
        if let Some(urls) = request.detail_image_urls {
            show.detail_image_urls = urls;
        }
        if let Some(sale_start_date) = request.sale_start_date {
            show.sale_start_date = sale_start_date;
        }

        // 일정 삭제
        if let Some(deleted_ids) = &request.deleted_schedule_ids {
            for &schedule_id in deleted_ids {
                self.guard_schedule_mutation(
                    &schedule_repo,
                    &reservation_repo,
                    id,
                    schedule_id,
                    editable,
                )
                .await?;

                schedule_repo.delete(schedule_id).await.map_err(|e| {
                    AdminError::DatabaseError(format!("Failed to delete schedule: {}", e))
                })?;
            }
        }

        // 일정 추가/수정 (schedule_id 유무로 구분)
        if let Some(entries) = &request.schedules {
            for entry in entries {
                let show_time = parse_show_time(&entry.show_time)?;

                match entry.schedule_id {
                    Some(schedule_id) => {
                        self.guard_schedule_mutation(
                            &schedule_repo,
                            &reservation_repo,
                            id,
                            schedule_id,
                            editable,
                        )
                        .await?;

                        schedule_repo
                            .update_times(
                                schedule_id,
                                entry.show_date,
                                show_time,
                                entry.ticket_open_time,
                            )
                            .await
                            .map_err(|e| {
                                AdminError::DatabaseError(format!(
                                    "Failed to update schedule: {}",
                                    e
                                ))
                            })?;
                    }
                    None => {
                        schedule_repo
                            .create(ShowScheduleCreate {
                                show_id: id,
                                show_date: entry.show_date,
                                show_time,
                                ticket_open_time: entry.ticket_open_time,
                                status: ScheduleStatus::BeforeOpen,
                            })
                            .await
                            .map_err(|e| {
                                AdminError::DatabaseError(format!(
                                    "Failed to create schedule: {}",
                                    e
                                ))
                            })?;
                    }
                }
            }
        }

        // 남은 일정 기준으로 첫/마지막 공연일 재계산
        let remaining = schedule_repo
            .find_by_show_id_ordered(id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch schedules: {}", e)))?;
        if let (Some(first), Some(last)) = (remaining.first(), remaining.last()) {
            show.start_date = first.show_date;
            show.end_date = last.show_date;
        }

        show_repo
            .update(&show)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to update show: {}", e)))?;

        tracing::info!("공연 수정: id={}", id);

        Ok(ShowUpdateResponse {
            show_id: id,
            message: "공연이 수정되었습니다".to_string(),
        })
    }

    /// 공연 삭제 (논리 삭제, WAITING 상태에서만 가능)
    /// Soft delete; only a WAITING show can be deleted
    pub async fn delete_show(&self, id: i64) -> Result<ShowDeleteResponse, AdminError> {
        let show_repo = ShowRepository::new(self.db.pool().clone());

        let mut show = show_repo
            .find_by_id_and_not_deleted(id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch show: {}", e)))?
            .ok_or(AdminError::ShowNotFound)?;

        if show.status != ShowStatus::Waiting {
            return Err(AdminError::DeleteRequiresWaiting);
        }

        // 논리 삭제 (별도 DELETED 상태가 없어 SUSPENDED 사용)
        show.status = ShowStatus::Suspended;
        show_repo
            .update(&show)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to delete show: {}", e)))?;

        tracing::info!("공연 삭제: id={}", id);

        Ok(ShowDeleteResponse {
            message: "공연이 삭제되었습니다".to_string(),
        })
    }

    /// 판매 상태 변경 (라이프사이클 상태와 무관하게 허용)
    /// Sale status toggle, unconditional on lifecycle status
    pub async fn update_sale_status(
        &self,
        id: i64,
        request: ShowSaleStatusUpdateRequest,
    ) -> Result<ShowSaleStatusUpdateResponse, AdminError> {
        let show_repo = ShowRepository::new(self.db.pool().clone());

        let mut show = show_repo
            .find_by_id_and_not_deleted(id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch show: {}", e)))?
            .ok_or(AdminError::ShowNotFound)?;

        show.sale_status = request.sale_status;
        show_repo
            .update(&show)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to update sale status: {}", e)))?;

        Ok(ShowSaleStatusUpdateResponse {
            show_id: show.id,
            sale_status: show.sale_status,
            message: "판매 상태가 변경되었습니다".to_string(),
        })
    }

    /// 일정 수정/삭제 가드
    /// 일정이 이 공연의 것인지 확인하고, 판매 시작 이후에는
    /// 예매가 존재하면 거부한다
    async fn guard_schedule_mutation(
        &self,
        schedule_repo: &ScheduleRepository,
        reservation_repo: &ReservationRepository,
        show_id: i64,
        schedule_id: i64,
        editable: bool,
    ) -> Result<(), AdminError> {
        let schedule = schedule_repo
            .find_by_id(schedule_id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch schedule: {}", e)))?
            .ok_or(AdminError::ScheduleNotFound { id: schedule_id })?;

        if schedule.show_id != show_id {
            return Err(AdminError::ScheduleNotFound { id: schedule_id });
        }

        if !editable {
            let has_reservations = reservation_repo
                .exists_for_schedule(schedule_id)
                .await
                .map_err(|e| {
                    AdminError::DatabaseError(format!("Failed to count reservations: {}", e))
                })?;

            if has_reservations {
                return Err(AdminError::ScheduleHasReservations { id: schedule_id });
            }
        }

        Ok(())
    }

    /// 장소 정보 해석
    /// 한글 지역명 → Region, (이름, 홀, 지역) → Venue,
    /// 같은 트리플의 좌석배치도가 있으면 함께 연결
    async fn resolve_location(
        &self,
        location: &LocationRequest,
    ) -> Result<(Venue, Option<i64>), AdminError> {
        let venue_repo = VenueRepository::new(self.db.pool().clone());
        let seat_map_repo = SeatMapRepository::new(self.db.pool().clone());

        let region = Region::from_label(&location.region)
            .ok_or_else(|| AdminError::UnsupportedRegion(location.region.clone()))?;

        let venue = venue_repo
            .find_by_name_hall_region(&location.venue_name, &location.hall_name, region)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch venue: {}", e)))?
            .ok_or(AdminError::VenueNotFound)?;

        let seat_map_id = seat_map_repo
            .find_by_region_venue_hall(region, &location.venue_name, &location.hall_name)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch seat map: {}", e)))?
            .map(|m| m.id);

        Ok((venue, seat_map_id))
    }
}

/// 장르 문자열 파싱
fn parse_genre(raw: &str) -> Result<Genre, AdminError> {
    Genre::from_str(raw).ok_or_else(|| AdminError::UnsupportedGenre(raw.to_string()))
}

/// "19:00" 형식의 공연 시간 파싱
fn parse_show_time(raw: &str) -> Result<NaiveTime, AdminError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| AdminError::InvalidShowTime(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_time() {
        assert_eq!(
            parse_show_time("19:00").expect("valid time"),
            NaiveTime::from_hms_opt(19, 0, 0).expect("valid literal")
        );
        assert!(parse_show_time("7pm").is_err());
        assert!(parse_show_time("25:00").is_err());
    }

    #[test]
    fn test_parse_genre() {
        assert_eq!(parse_genre("MUSICAL").expect("valid genre"), Genre::Musical);
        assert!(matches!(
            parse_genre("OPERA"),
            Err(AdminError::UnsupportedGenre(_))
        ));
    }
}
