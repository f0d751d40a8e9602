use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::geo::enums::geo_sort::GeoSort;
use crate::geo::enums::geo_unit::GeoUnit;
use crate::geo::structs::geo_index::GeoIndex;

/// Upper bound on members per GEOADD call; one oversized command can stall
/// the server for everyone sharing it.
pub const MAX_BATCH_MEMBERS: usize = 500;

pub(crate) fn check_coordinates(longitude: f64, latitude: f64) -> Result<(), CacheError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CacheError::Parameter(format!("longitude {} out of range [-180, 180]", longitude)));
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CacheError::Parameter(format!("latitude {} out of range [-90, 90]", latitude)));
    }
    Ok(())
}

impl GeoIndex {
    pub fn new(client: RedisClient, name: &str) -> GeoIndex {
        GeoIndex {
            client,
            cache_key: format!("redis_geo_{}", name),
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    /// Adds or repositions members, given as (longitude, latitude, name)
    /// triples. Re-adding an existing name updates its position; the return
    /// value counts only newly added members.
    pub async fn add(&self, members: &[(f64, f64, &str)]) -> Result<u64, CacheError> {
        if members.len() > MAX_BATCH_MEMBERS {
            return Err(CacheError::Parameter(format!(
                "geo add of {} members exceeds the limit of {}",
                members.len(), MAX_BATCH_MEMBERS
            )));
        }
        if members.is_empty() {
            return Ok(0);
        }
        for (longitude, latitude, _) in members {
            check_coordinates(*longitude, *latitude)?;
        }
        let mut lease = self.client.lease().await?;
        let mut command = redis::cmd("GEOADD");
        command.arg(&self.cache_key);
        for (longitude, latitude, member) in members {
            command.arg(*longitude).arg(*latitude).arg(*member);
        }
        let added: u64 = command.query_async(&mut *lease).await?;
        Ok(added)
    }

    /// Great-circle distance between two members, in the requested unit.
    /// `None` when either member is not in the index.
    pub async fn distance(&self, member_a: &str, member_b: &str, unit: GeoUnit) -> Result<Option<f64>, CacheError> {
        let mut lease = self.client.lease().await?;
        let distance: Option<f64> = redis::cmd("GEODIST")
            .arg(&self.cache_key)
            .arg(member_a)
            .arg(member_b)
            .arg(unit.wire_token())
            .query_async(&mut *lease)
            .await?;
        Ok(distance)
    }

    /// Positions as (longitude, latitude), entry-per-member, `None` for
    /// members absent from the index.
    pub async fn position(&self, members: &[&str]) -> Result<Vec<Option<(f64, f64)>>, CacheError> {
        if members.is_empty() {
            return Ok(Vec::new());
        }
        let mut lease = self.client.lease().await?;
        let mut command = redis::cmd("GEOPOS");
        command.arg(&self.cache_key);
        for member in members {
            command.arg(*member);
        }
        let positions: Vec<Option<(f64, f64)>> = command.query_async(&mut *lease).await?;
        Ok(positions)
    }

    /// Members within `radius` of the given point. A member at exactly
    /// `radius` is included.
    pub async fn radius_search(
        &self,
        longitude: f64,
        latitude: f64,
        radius: f64,
        unit: GeoUnit,
        count: Option<usize>,
        sort: Option<GeoSort>,
    ) -> Result<Vec<String>, CacheError> {
        check_coordinates(longitude, latitude)?;
        let mut lease = self.client.lease().await?;
        let mut command = redis::cmd("GEORADIUS");
        command.arg(&self.cache_key).arg(longitude).arg(latitude).arg(radius).arg(unit.wire_token());
        Self::apply_radius_options(&mut command, count, sort);
        let members: Vec<String> = command.query_async(&mut *lease).await?;
        Ok(members)
    }

    /// Like `radius_search`, returning each member with its distance from
    /// the query point in the requested unit.
    pub async fn radius_search_with_distance(
        &self,
        longitude: f64,
        latitude: f64,
        radius: f64,
        unit: GeoUnit,
        count: Option<usize>,
        sort: Option<GeoSort>,
    ) -> Result<Vec<(String, f64)>, CacheError> {
        check_coordinates(longitude, latitude)?;
        let mut lease = self.client.lease().await?;
        let mut command = redis::cmd("GEORADIUS");
        command.arg(&self.cache_key).arg(longitude).arg(latitude).arg(radius).arg(unit.wire_token());
        command.arg("WITHDIST");
        Self::apply_radius_options(&mut command, count, sort);
        let members: Vec<(String, f64)> = command.query_async(&mut *lease).await?;
        Ok(members)
    }

    /// Radius search centered on an existing member instead of raw
    /// coordinates.
    pub async fn radius_search_by_member(
        &self,
        member: &str,
        radius: f64,
        unit: GeoUnit,
        count: Option<usize>,
        sort: Option<GeoSort>,
    ) -> Result<Vec<String>, CacheError> {
        let mut lease = self.client.lease().await?;
        let mut command = redis::cmd("GEORADIUSBYMEMBER");
        command.arg(&self.cache_key).arg(member).arg(radius).arg(unit.wire_token());
        Self::apply_radius_options(&mut command, count, sort);
        let members: Vec<String> = command.query_async(&mut *lease).await?;
        Ok(members)
    }

    pub async fn radius_search_by_member_with_distance(
        &self,
        member: &str,
        radius: f64,
        unit: GeoUnit,
        count: Option<usize>,
        sort: Option<GeoSort>,
    ) -> Result<Vec<(String, f64)>, CacheError> {
        let mut lease = self.client.lease().await?;
        let mut command = redis::cmd("GEORADIUSBYMEMBER");
        command.arg(&self.cache_key).arg(member).arg(radius).arg(unit.wire_token());
        command.arg("WITHDIST");
        Self::apply_radius_options(&mut command, count, sort);
        let members: Vec<(String, f64)> = command.query_async(&mut *lease).await?;
        Ok(members)
    }

    /// Geohash strings for members, entry-per-member, `None` when absent.
    pub async fn member_hash(&self, members: &[&str]) -> Result<Vec<Option<String>>, CacheError> {
        if members.is_empty() {
            return Ok(Vec::new());
        }
        let mut lease = self.client.lease().await?;
        let mut command = redis::cmd("GEOHASH");
        command.arg(&self.cache_key);
        for member in members {
            command.arg(*member);
        }
        let hashes: Vec<Option<String>> = command.query_async(&mut *lease).await?;
        Ok(hashes)
    }

    pub async fn clear(&self) -> Result<(), CacheError> {
        self.client.delete(&[self.cache_key.as_str()]).await?;
        Ok(())
    }

    fn apply_radius_options(command: &mut redis::Cmd, count: Option<usize>, sort: Option<GeoSort>) {
        // COUNT truncates after the server applies the sort order.
        if let Some(count) = count {
            command.arg("COUNT").arg(count);
        }
        if let Some(sort) = sort {
            command.arg(sort.wire_token());
        }
    }
}
