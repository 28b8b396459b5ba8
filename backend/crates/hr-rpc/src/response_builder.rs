//! Domain model to wire message conversions.

use hr_core::{Article, BloodPressureReading, User, WeightEntry};

pub fn user_to_proto(user: &User) -> hr_proto::User {
    hr_proto::User {
        id: user.id.to_string(),
        subject: user.subject.clone(),
        created_at: user.created_at.timestamp(),
        updated_at: user.updated_at.timestamp(),
    }
}

pub fn weight_entry_to_proto(entry: &WeightEntry) -> hr_proto::WeightEntry {
    hr_proto::WeightEntry {
        id: entry.id.to_string(),
        weight_kg: entry.weight_kg,
        measured_at: entry.measured_at.timestamp(),
        note: entry.note.clone(),
        created_at: entry.created_at.timestamp(),
        updated_at: entry.updated_at.timestamp(),
    }
}

pub fn reading_to_proto(reading: &BloodPressureReading) -> hr_proto::BloodPressureReading {
    hr_proto::BloodPressureReading {
        id: reading.id.to_string(),
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        pulse: reading.pulse,
        measured_at: reading.measured_at.timestamp(),
        created_at: reading.created_at.timestamp(),
        updated_at: reading.updated_at.timestamp(),
    }
}

pub fn article_to_proto(article: &Article) -> hr_proto::Article {
    hr_proto::Article {
        id: article.id.to_string(),
        title: article.title.clone(),
        summary: article.summary.clone(),
        body: article.body.clone(),
        published_at: article.published_at.timestamp(),
    }
}
