//! Storing geometries in SQLite BLOB columns through [sqlx].
//!
//! Every geometry type binds as a little-endian WKB BLOB and decodes from one. Values stored
//! with any other SQLite storage class fail to decode with [`WKBError::InvalidStorage`].

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::{Decode, Encode, Type, TypeInfo, ValueRef};

use crate::api::{FromWKB, ToWKB};
use crate::error::WKBError;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// The raw bytes of a BLOB value, or an error naming the storage class found instead.
fn blob_bytes<'r>(
    value: <Sqlite as sqlx::database::HasValueRef<'r>>::ValueRef,
) -> Result<&'r [u8], BoxDynError> {
    if value.is_null() || value.type_info().name() != "BLOB" {
        let storage = value.type_info().name().to_owned();
        log::debug!("refusing to decode WKB from SQLite {storage} value");
        return Err(Box::new(WKBError::InvalidStorage(
            format!("expected BLOB, found {storage}").into(),
        )));
    }
    <&[u8] as Decode<Sqlite>>::decode(value)
}

macro_rules! impl_sqlite_blob {
    ($type:ident) => {
        impl Type<Sqlite> for $type {
            fn type_info() -> SqliteTypeInfo {
                <Vec<u8> as Type<Sqlite>>::type_info()
            }

            fn compatible(ty: &SqliteTypeInfo) -> bool {
                <Vec<u8> as Type<Sqlite>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Sqlite> for $type {
            fn decode(
                value: <Sqlite as sqlx::database::HasValueRef<'r>>::ValueRef,
            ) -> Result<Self, BoxDynError> {
                let buf = blob_bytes(value)?;
                Ok($type::from_wkb(buf)?)
            }
        }

        impl<'q> Encode<'q, Sqlite> for $type {
            fn encode_by_ref(
                &self,
                args: &mut <Sqlite as sqlx::database::HasArguments<'q>>::ArgumentBuffer,
            ) -> IsNull {
                <Vec<u8> as Encode<'q, Sqlite>>::encode(self.to_wkb(), args)
            }

            fn size_hint(&self) -> usize {
                self.wkb_size()
            }
        }
    };
}

impl_sqlite_blob!(Geometry);
impl_sqlite_blob!(Point);
impl_sqlite_blob!(LineString);
impl_sqlite_blob!(Polygon);
impl_sqlite_blob!(MultiPoint);
impl_sqlite_blob!(MultiLineString);
impl_sqlite_blob!(MultiPolygon);
impl_sqlite_blob!(GeometryCollection);
