//! One-time demonstration-data seeding.
//!
//! Each seedable collection is populated only if it is currently empty.
//! The empty-check and the inserts are not transactional: callers serialize
//! passes behind [`crate::state::AppState::seed_lock`], which closes the
//! window within this process. Separate processes can still both observe an
//! empty collection and both insert; the store enforces no uniqueness.

use serde::de::DeserializeOwned;
use serde::Serialize;

use sekolah_core::collection::Collection;
use sekolah_core::department::Department;
use sekolah_core::event::Event;
use sekolah_core::extracurricular::Extracurricular;
use sekolah_core::news::News;
use sekolah_core::osis_member::OsisMember;
use sekolah_core::school_info::SchoolInfo;
use sekolah_db::{Store, StoreError};

use crate::error::AppError;

/// Run one seeding pass over all seedable collections.
///
/// A failed insert aborts the pass; collections seeded earlier in the same
/// pass stay seeded.
pub async fn run(store: &Store) -> Result<(), AppError> {
    seed_collection(store, &[demo_school_info()]).await?;
    seed_collection(store, &demo_departments()).await?;
    seed_collection(store, &demo_extracurriculars()).await?;
    seed_collection(store, &demo_osis_members()).await?;
    seed_collection(store, &demo_events()).await?;
    seed_collection(store, &demo_news()).await?;
    Ok(())
}

async fn seed_collection<T>(store: &Store, records: &[T]) -> Result<(), AppError>
where
    T: Collection + Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    let existing = store.list_all::<T>(T::NAME).await.map_err(seed_failed)?;
    if !existing.is_empty() {
        tracing::debug!(collection = T::NAME, "Already populated; skipping");
        return Ok(());
    }

    for record in records {
        store
            .insert_one(T::NAME, record)
            .await
            .map_err(seed_failed)?;
    }
    tracing::info!(
        collection = T::NAME,
        count = records.len(),
        "Seeded demonstration records"
    );
    Ok(())
}

fn seed_failed(err: StoreError) -> AppError {
    AppError::SeedFailed(err.to_string())
}

// ---------------------------------------------------------------------------
// Demonstration content
// ---------------------------------------------------------------------------

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn demo_school_info() -> SchoolInfo {
    SchoolInfo {
        name: "SMA Negeri Nusantara".to_string(),
        tagline: s("Berkarakter, Berprestasi, Berbudaya"),
        description: "Sekolah menengah atas dengan fokus pada pengembangan karakter, \
                      literasi, numerasi, dan prestasi akademik maupun non-akademik."
            .to_string(),
        address: "Jl. Merdeka No. 123, Kota Harmoni".to_string(),
        phone: s("(021) 555-1234"),
        email: s("info@sman-nusantara.sch.id"),
        hero_image: s(
            "https://images.unsplash.com/photo-1580587771525-78b9dba3b914?q=80&w=1200&auto=format&fit=crop",
        ),
    }
}

pub fn demo_departments() -> Vec<Department> {
    vec![
        Department {
            name: "IPA".to_string(),
            head: s("Drs. Budi Santoso"),
            description: s("Ilmu Pengetahuan Alam"),
        },
        Department {
            name: "IPS".to_string(),
            head: s("Dra. Sari Wulandari"),
            description: s("Ilmu Pengetahuan Sosial"),
        },
        Department {
            name: "Bahasa".to_string(),
            head: s("Drs. Rudi Hartono"),
            description: s("Bahasa dan Sastra"),
        },
    ]
}

pub fn demo_extracurriculars() -> Vec<Extracurricular> {
    vec![
        Extracurricular {
            name: "Paskibra".to_string(),
            mentor: s("Pak Andi"),
            schedule: s("Selasa & Kamis"),
            description: s("Pasukan Pengibar Bendera"),
            icon: s("flag"),
        },
        Extracurricular {
            name: "Pramuka".to_string(),
            mentor: s("Bu Rina"),
            schedule: s("Jumat"),
            description: s("Gerakan Pramuka"),
            icon: s("tent"),
        },
        Extracurricular {
            name: "Basket".to_string(),
            mentor: s("Coach Dimas"),
            schedule: s("Rabu"),
            description: s("Tim Basket Sekolah"),
            icon: s("basketball"),
        },
        Extracurricular {
            name: "Karya Ilmiah Remaja".to_string(),
            mentor: s("Bu Maya"),
            schedule: s("Senin"),
            description: s("Penelitian Sains"),
            icon: s("beaker"),
        },
    ]
}

pub fn demo_osis_members() -> Vec<OsisMember> {
    vec![
        OsisMember {
            name: "Nadia Putri".to_string(),
            role: "Ketua OSIS".to_string(),
            class_name: s("XI IPA 2"),
            photo: None,
            bio: s("Mewujudkan OSIS yang aktif dan inspiratif."),
        },
        OsisMember {
            name: "Rafi Akbar".to_string(),
            role: "Wakil Ketua".to_string(),
            class_name: s("XI IPS 1"),
            photo: None,
            bio: s("Kolaboratif, kreatif, dan peduli."),
        },
        OsisMember {
            name: "Siti Rahma".to_string(),
            role: "Sekretaris".to_string(),
            class_name: s("X IPA 3"),
            photo: None,
            bio: s("Tertib administrasi, solid dalam aksi."),
        },
        OsisMember {
            name: "Dimas Arya".to_string(),
            role: "Bendahara".to_string(),
            class_name: s("XII IPA 1"),
            photo: None,
            bio: s("Transparan dan akuntabel."),
        },
    ]
}

pub fn demo_events() -> Vec<Event> {
    vec![
        Event {
            title: "Penerimaan Peserta Didik Baru".to_string(),
            date: "2025-06-10".to_string(),
            location: s("Aula Utama"),
            description: s("Sosialisasi PPDB 2025"),
            category: s("school"),
        },
        Event {
            title: "Lomba Sains".to_string(),
            date: "2025-08-01".to_string(),
            location: s("Lab IPA"),
            description: s("Kompetisi KIR tingkat kota"),
            category: s("academic"),
        },
        Event {
            title: "Class Meeting".to_string(),
            date: "2025-12-15".to_string(),
            location: s("Lapangan"),
            description: s("Turnamen olahraga antar kelas"),
            category: s("sport"),
        },
    ]
}

pub fn demo_news() -> Vec<News> {
    vec![
        News {
            title: "Tim Basket Juara I".to_string(),
            summary: s("Prestasi gemilang di kejuaraan daerah."),
            content: "Tim basket SMA Negeri Nusantara meraih juara I...".to_string(),
            image: None,
            author: s("Humas"),
        },
        News {
            title: "Webinar Literasi Digital".to_string(),
            summary: s("Meningkatkan literasi bagi siswa."),
            content: "Bekerja sama dengan Kominfo...".to_string(),
            image: None,
            author: s("Humas"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture sizes are load-bearing: the seed-then-list behaviour tested
    // against a live store assumes exactly these counts.

    #[test]
    fn fixture_counts_are_stable() {
        assert_eq!(demo_departments().len(), 3);
        assert_eq!(demo_extracurriculars().len(), 4);
        assert_eq!(demo_osis_members().len(), 4);
        assert_eq!(demo_events().len(), 3);
        assert_eq!(demo_news().len(), 2);
    }

    #[test]
    fn fixture_content_passes_validation() {
        assert!(demo_school_info().validate().is_ok());
    }
}
