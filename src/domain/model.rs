use crate::domain::dto::{MoonDto, PlanetDto};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Moon {
    id: String,
    gravity: f64,
}

impl Moon {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl From<MoonDto> for Moon {
    fn from(record: MoonDto) -> Self {
        Self {
            id: record.id,
            gravity: record.gravity,
        }
    }
}

/// A planet together with the moons whose details could be fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    id: String,
    semi_major_axis: f64,
    moons: Vec<Moon>,
}

impl Planet {
    /// Builds a planet from its record and the moon records already resolved
    /// for it. `None` yields a planet with an empty moon list.
    pub fn new(record: PlanetDto, moons: Option<Vec<MoonDto>>) -> Self {
        Self {
            id: record.id,
            semi_major_axis: record.semi_major_axis,
            moons: moons
                .unwrap_or_default()
                .into_iter()
                .map(Moon::from)
                .collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    pub fn has_moons(&self) -> bool {
        !self.moons.is_empty()
    }

    /// Mean surface gravity of the moons, `0.0` for a planet without moons.
    pub fn average_moon_gravity(&self) -> f64 {
        if !self.has_moons() {
            return 0.0;
        }

        let mut total_gravity = 0.0;
        for moon in &self.moons {
            total_gravity += moon.gravity;
        }

        total_gravity / self.moons.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet_record(id: &str) -> PlanetDto {
        PlanetDto {
            id: id.to_string(),
            semi_major_axis: 227939200.0,
            moons: None,
        }
    }

    fn moon_record(id: &str, gravity: f64) -> MoonDto {
        MoonDto {
            id: id.to_string(),
            gravity,
        }
    }

    #[test]
    fn test_planet_without_moons() {
        let planet = Planet::new(planet_record("mercure"), None);

        assert_eq!(planet.id(), "mercure");
        assert_eq!(planet.semi_major_axis(), 227939200.0);
        assert!(planet.moons().is_empty());
        assert!(!planet.has_moons());
        assert_eq!(planet.average_moon_gravity(), 0.0);
    }

    #[test]
    fn test_empty_resolved_list_behaves_like_absent() {
        let planet = Planet::new(planet_record("venus"), Some(vec![]));

        assert!(!planet.has_moons());
        assert_eq!(planet.average_moon_gravity(), 0.0);
    }

    #[test]
    fn test_moons_keep_supplied_order() {
        let planet = Planet::new(
            planet_record("mars"),
            Some(vec![moon_record("phobos", 0.0057), moon_record("deimos", 0.003)]),
        );

        let ids: Vec<&str> = planet.moons().iter().map(Moon::id).collect();
        assert_eq!(ids, vec!["phobos", "deimos"]);
        assert!(planet.has_moons());
    }

    #[test]
    fn test_average_moon_gravity_is_mean() {
        let planet = Planet::new(
            planet_record("jupiter"),
            Some(vec![
                moon_record("io", 1.5),
                moon_record("europe", 2.5),
                moon_record("ganymede", 2.0),
            ]),
        );

        assert!((planet.average_moon_gravity() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_moon_gravity_ignores_order() {
        let forward = Planet::new(
            planet_record("saturne"),
            Some(vec![moon_record("titan", 1.35), moon_record("rhea", 0.25)]),
        );
        let reversed = Planet::new(
            planet_record("saturne"),
            Some(vec![moon_record("rhea", 0.25), moon_record("titan", 1.35)]),
        );

        assert!((forward.average_moon_gravity() - reversed.average_moon_gravity()).abs() < 1e-12);
        assert!((forward.average_moon_gravity() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_moon_copies_record_verbatim() {
        let moon = Moon::from(moon_record("lune", 1.62));
        assert_eq!(moon.id(), "lune");
        assert_eq!(moon.gravity(), 1.62);
    }
}
