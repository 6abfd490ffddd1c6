use super::{SeaOrmStorage, map_db_err};
use crate::entity::{academic_years, branches, semesters};
use crate::errors::Result;
use crate::models::dropdowns::{DropdownResponse, LabeledOption, NamedOption};
use sea_orm::{EntityTrait, QueryOrder};

impl SeaOrmStorage {
    /// 下拉数据：三次查询共用同一个连接池
    pub async fn list_dropdowns_impl(&self) -> Result<DropdownResponse> {
        let branches = branches::Entity::find()
            .order_by_asc(branches::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err("查询专业失败"))?;

        let years = academic_years::Entity::find()
            .order_by_asc(academic_years::Column::YearId)
            .all(&self.db)
            .await
            .map_err(map_db_err("查询学年失败"))?;

        let semesters = semesters::Entity::find()
            .order_by_asc(semesters::Column::Ordinal)
            .all(&self.db)
            .await
            .map_err(map_db_err("查询学期失败"))?;

        Ok(DropdownResponse {
            branches: branches
                .into_iter()
                .map(|b| NamedOption {
                    id: b.branch_id,
                    name: b.name,
                })
                .collect(),
            years: years
                .into_iter()
                .map(|y| LabeledOption {
                    id: y.year_id,
                    label: y.year_label,
                })
                .collect(),
            semesters: semesters
                .into_iter()
                .map(|s| LabeledOption {
                    id: s.semester_id,
                    label: s.semester_label,
                })
                .collect(),
        })
    }
}
