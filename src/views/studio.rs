// src/views/studio.rs

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use validator::Validate;

use crate::{
    common::error::AppError,
    models::studio::{
        Booking, BookingStatus, GalleryImage, Review, ScheduleSlot, ServiceForm, ServiceOffering,
        SlotStatus, StudioStats,
    },
};

/// Nail studio back office. Works purely in memory, nothing is sent anywhere.
#[derive(Debug, Clone)]
pub struct StudioDashboard {
    pub bookings: Vec<Booking>,
    pub services: Vec<ServiceOffering>,
    pub schedule: Vec<ScheduleSlot>,
    pub gallery: Vec<GalleryImage>,
    pub reviews: Vec<Review>,
}

impl StudioDashboard {
    pub fn new(
        bookings: Vec<Booking>,
        services: Vec<ServiceOffering>,
        schedule: Vec<ScheduleSlot>,
        gallery: Vec<GalleryImage>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            bookings,
            services,
            schedule,
            gallery,
            reviews,
        }
    }

    // --- Bookings ---

    pub fn approve_booking(&mut self, id: &str) {
        if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
            booking.status = BookingStatus::Confirmed;
        }
    }

    pub fn reject_booking(&mut self, id: &str) {
        self.bookings.retain(|b| b.id != id);
    }

    // --- Schedule ---

    /// Flips a slot between available and busy. Booked slots stay booked.
    pub fn toggle_slot(&mut self, index: usize) {
        if let Some(slot) = self.schedule.get_mut(index) {
            slot.status = match slot.status {
                SlotStatus::Available => SlotStatus::Busy,
                SlotStatus::Busy => SlotStatus::Available,
                SlotStatus::Booked => SlotStatus::Booked,
            };
        }
    }

    // --- Services ---

    /// Edits `editing` when given, otherwise adds a new active service.
    pub fn save_service(&mut self, editing: Option<i64>, form: ServiceForm) -> Result<i64, AppError> {
        form.validate()?;

        if let Some(id) = editing {
            if let Some(service) = self.services.iter_mut().find(|s| s.id == id) {
                service.name = form.name;
                service.price = form.price;
                service.duration_minutes = form.duration_minutes;
                return Ok(id);
            }
        }

        let id = self.services.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.services.push(ServiceOffering {
            id,
            name: form.name,
            price: form.price,
            duration_minutes: form.duration_minutes,
            active: true,
        });
        Ok(id)
    }

    pub fn delete_service(&mut self, id: i64) {
        self.services.retain(|s| s.id != id);
    }

    pub fn toggle_service(&mut self, id: i64) {
        if let Some(service) = self.services.iter_mut().find(|s| s.id == id) {
            service.active = !service.active;
        }
    }

    // --- Overview ---

    pub fn stats(&self, day: NaiveDate) -> StudioStats {
        let bookings_on_day = self.bookings.iter().filter(|b| b.date == day).count();
        let revenue = self
            .bookings
            .iter()
            .filter(|b| b.status.is_revenue())
            .map(|b| b.price)
            .sum();

        let average_rating = if self.reviews.is_empty() {
            Decimal::ZERO
        } else {
            let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
            (Decimal::from(sum) / Decimal::from(self.reviews.len()))
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };

        StudioStats {
            bookings_on_day,
            revenue,
            average_rating,
        }
    }

    /// The demo data the studio screen starts with.
    pub fn with_sample_data() -> Self {
        let day = |d: u32| NaiveDate::from_ymd_opt(2026, 2, d).unwrap_or_default();
        let jan = |d: u32| NaiveDate::from_ymd_opt(2026, 1, d).unwrap_or_default();
        let slip = Some("https://images.unsplash.com/photo-1554224311-beee460c201f?w=400".to_string());

        let booking = |id: &str, customer: &str, service: &str, date, time: &str, price: i64, status, slip: Option<String>| Booking {
            id: id.to_string(),
            customer_name: customer.to_string(),
            service: service.to_string(),
            date,
            time: time.to_string(),
            price: Decimal::from(price),
            status,
            payment_slip: slip,
        };
        let bookings = vec![
            booking("BK001", "AppleJK", "Gel Polish", day(3), "10:00 AM", 350, BookingStatus::WaitingVerification, slip.clone()),
            booking("BK002", "Sarah Chen", "PVC Extension", day(3), "02:00 PM", 800, BookingStatus::Confirmed, slip),
            booking("BK003", "Emma Wilson", "Nail Art Premium", day(2), "11:30 AM", 650, BookingStatus::Completed, None),
            booking("BK004", "Lisa Park", "Gel Polish", day(4), "09:00 AM", 350, BookingStatus::Pending, None),
        ];

        let service = |id: i64, name: &str, price: i64, duration_minutes: u32, active: bool| ServiceOffering {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
            duration_minutes,
            active,
        };
        let services = vec![
            service(1, "Gel Polish", 350, 60, true),
            service(2, "PVC Extension", 800, 120, true),
            service(3, "Nail Art Premium", 650, 90, true),
            service(4, "Manicure Basic", 250, 45, true),
            service(5, "Pedicure Spa", 500, 75, false),
        ];

        let slot = |time: &str, status, customer: Option<&str>| ScheduleSlot {
            date: day(3),
            time: time.to_string(),
            status,
            customer: customer.map(str::to_string),
        };
        let schedule = vec![
            slot("09:00 AM", SlotStatus::Available, None),
            slot("10:00 AM", SlotStatus::Booked, Some("AppleJK")),
            slot("11:00 AM", SlotStatus::Available, None),
            slot("12:00 PM", SlotStatus::Busy, None),
            slot("01:00 PM", SlotStatus::Available, None),
            slot("02:00 PM", SlotStatus::Booked, Some("Sarah Chen")),
            slot("03:00 PM", SlotStatus::Available, None),
            slot("04:00 PM", SlotStatus::Busy, None),
        ];

        let gallery = [
            ("photo-1604654894610-df63bc536371", "Pastel French Tips"),
            ("photo-1610992015732-2449b76344bc", "Rose Gold Glitter"),
            ("photo-1632345031435-8727f6897d53", "Floral Nail Art"),
            ("photo-1519014816548-bf5fe059798b", "Marble Effect"),
            ("photo-1606760227091-3dd870d97f1d", "Ombre Pink"),
            ("photo-1522338140262-f46f5913618a", "Minimalist Design"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((photo, caption), id)| GalleryImage {
            id,
            url: format!("https://images.unsplash.com/{}?w=400", photo),
            caption: caption.to_string(),
        })
        .collect();

        let review = |id: i64, customer: &str, rating: u8, comment: &str, date| Review {
            id,
            customer_name: customer.to_string(),
            rating,
            comment: comment.to_string(),
            date,
        };
        let reviews = vec![
            review(1, "AppleJK", 5, "Amazing service! The nail art was perfect and the artist was very professional.", jan(28)),
            review(2, "Sarah Chen", 5, "Love my new nails! Very clean studio and friendly staff.", jan(25)),
            review(3, "Emma Wilson", 4, "Great work but had to wait a bit longer than expected. Overall satisfied!", jan(20)),
            review(4, "Lisa Park", 5, "Best nail salon in town! Highly recommend the gel polish service.", jan(15)),
        ];

        Self::new(bookings, services, schedule, gallery, reviews)
    }
}
