//! Builtin template bodies.
//!
//! One entry per store path, grouped by tier:
//!
//! - `typeorm/…`, `prisma/…`, `mongoose/…` — ORM-specific variants. Only
//!   storage-touching artifacts live here (project package.json, entity,
//!   repository implementation).
//! - `generic/…` — the shared baseline everything else resolves to.
//!
//! Bodies are Handlebars sources; see `RenderContext` for the variable set.
//! The resolver's fallback search is what keeps this table small: a command
//! class is written once, not three times.

/// All builtin templates as (store path, body) pairs.
pub fn all() -> &'static [(&'static str, &'static str)] {
    TEMPLATES
}

static TEMPLATES: &[(&str, &str)] = &[
    // ── project: ORM-specific manifests ──────────────────────────────────────
    ("typeorm/project/package.json", TYPEORM_PACKAGE_JSON),
    ("prisma/project/package.json", PRISMA_PACKAGE_JSON),
    ("mongoose/project/package.json", MONGOOSE_PACKAGE_JSON),
    // ── project: generic scaffolding ─────────────────────────────────────────
    ("generic/project/tsconfig.json", TSCONFIG_JSON),
    ("generic/project/nest-cli.json", NEST_CLI_JSON),
    ("generic/project/gitignore", GITIGNORE),
    ("generic/project/readme", README),
    ("generic/project/main", MAIN_TS),
    ("generic/project/app.module", APP_MODULE_TS),
    // ── module ───────────────────────────────────────────────────────────────
    ("generic/module/module", MODULE_TS),
    ("generic/module/entity.index", ENTITY_INDEX_TS),
    // ── resource: ORM-specific ───────────────────────────────────────────────
    ("typeorm/resource/entity", TYPEORM_ENTITY),
    ("prisma/resource/entity", PRISMA_ENTITY),
    ("mongoose/resource/entity", MONGOOSE_ENTITY),
    ("typeorm/resource/repository.impl", TYPEORM_REPOSITORY),
    ("prisma/resource/repository.impl", PRISMA_REPOSITORY),
    ("mongoose/resource/repository.impl", MONGOOSE_REPOSITORY),
    // ── resource: generic ────────────────────────────────────────────────────
    ("generic/resource/repository.interface", REPOSITORY_INTERFACE),
    ("generic/resource/create-command", CREATE_COMMAND),
    ("generic/resource/update-command", UPDATE_COMMAND),
    ("generic/resource/delete-command", DELETE_COMMAND),
    ("generic/resource/get-query", GET_QUERY),
    ("generic/resource/list-query", LIST_QUERY),
    ("generic/resource/create-use-case", CREATE_USE_CASE),
    ("generic/resource/update-use-case", UPDATE_USE_CASE),
    ("generic/resource/delete-use-case", DELETE_USE_CASE),
    ("generic/resource/get-use-case", GET_USE_CASE),
    ("generic/resource/list-use-case", LIST_USE_CASE),
    ("generic/resource/dto", DTO),
    ("generic/resource/controller", CONTROLLER),
];

// ── project manifests ─────────────────────────────────────────────────────────

static TYPEORM_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "0.0.1",
  "description": "{{projectNamePascal}} - NestJS service (hexagonal architecture, TypeORM)",
  "scripts": {
    "build": "nest build",
    "start": "nest start",
    "start:dev": "nest start --watch",
    "test": "jest"
  },
  "dependencies": {
    "@nestjs/common": "^10.0.0",
    "@nestjs/core": "^10.0.0",
    "@nestjs/platform-express": "^10.0.0",
    "@nestjs/typeorm": "^10.0.0",
    "typeorm": "^0.3.17",
    "pg": "^8.11.0",
    "reflect-metadata": "^0.1.13",
    "rxjs": "^7.8.1"
  },
  "devDependencies": {
    "@nestjs/cli": "^10.0.0",
    "@types/node": "^20.3.1",
    "jest": "^29.5.0",
    "typescript": "^5.1.3"
  }
}
"#;

static PRISMA_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "0.0.1",
  "description": "{{projectNamePascal}} - NestJS service (hexagonal architecture, Prisma)",
  "scripts": {
    "build": "nest build",
    "start": "nest start",
    "start:dev": "nest start --watch",
    "prisma:generate": "prisma generate",
    "test": "jest"
  },
  "dependencies": {
    "@nestjs/common": "^10.0.0",
    "@nestjs/core": "^10.0.0",
    "@nestjs/platform-express": "^10.0.0",
    "@prisma/client": "^5.0.0",
    "reflect-metadata": "^0.1.13",
    "rxjs": "^7.8.1"
  },
  "devDependencies": {
    "@nestjs/cli": "^10.0.0",
    "@types/node": "^20.3.1",
    "jest": "^29.5.0",
    "prisma": "^5.0.0",
    "typescript": "^5.1.3"
  }
}
"#;

static MONGOOSE_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "0.0.1",
  "description": "{{projectNamePascal}} - NestJS service (hexagonal architecture, Mongoose)",
  "scripts": {
    "build": "nest build",
    "start": "nest start",
    "start:dev": "nest start --watch",
    "test": "jest"
  },
  "dependencies": {
    "@nestjs/common": "^10.0.0",
    "@nestjs/core": "^10.0.0",
    "@nestjs/platform-express": "^10.0.0",
    "@nestjs/mongoose": "^10.0.0",
    "mongoose": "^7.3.0",
    "reflect-metadata": "^0.1.13",
    "rxjs": "^7.8.1"
  },
  "devDependencies": {
    "@nestjs/cli": "^10.0.0",
    "@types/node": "^20.3.1",
    "jest": "^29.5.0",
    "typescript": "^5.1.3"
  }
}
"#;

// ── project scaffolding ───────────────────────────────────────────────────────

static TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "module": "commonjs",
    "declaration": true,
    "removeComments": true,
    "emitDecoratorMetadata": true,
    "experimentalDecorators": true,
    "allowSyntheticDefaultImports": true,
    "target": "ES2021",
    "sourceMap": true,
    "outDir": "./dist",
    "baseUrl": "./",
    "incremental": true,
    "strictNullChecks": true
  }
}
"#;

static NEST_CLI_JSON: &str = r#"{
  "$schema": "https://json.schemastore.org/nest-cli",
  "collection": "@nestjs/schematics",
  "sourceRoot": "src"
}
"#;

static GITIGNORE: &str = r#"node_modules/
dist/
coverage/
.env
*.log
"#;

static README: &str = r#"# {{projectName}}

{{projectNamePascal}} - a NestJS service generated with hexagonal architecture
and CQRS, backed by {{orm}} ({{database}}).

## Layout

- `src/modules/<module>/domain` - entities, repository interfaces, value objects
- `src/modules/<module>/application` - commands, queries, use cases, DTOs
- `src/modules/<module>/infrastructure` - persistence and presentation adapters

## Getting started

```bash
npm install
npm run start:dev
```

Generate modules and resources with `hexnest module` and `hexnest resource`.
"#;

static MAIN_TS: &str = r#"import { NestFactory } from '@nestjs/core';
import { AppModule } from './app.module';

async function bootstrap() {
  const app = await NestFactory.create(AppModule);
  await app.listen(process.env.PORT ?? 3000);
}

bootstrap();
"#;

static APP_MODULE_TS: &str = r#"import { Module } from '@nestjs/common';

@Module({
  imports: [],
  controllers: [],
  providers: [],
})
export class AppModule {}
"#;

// ── module ────────────────────────────────────────────────────────────────────

static MODULE_TS: &str = r#"import { Module } from '@nestjs/common';

@Module({
  imports: [],
  controllers: [],
  providers: [],
})
export class {{moduleNamePascal}}Module {}
"#;

static ENTITY_INDEX_TS: &str = r#"// {{moduleNamePascal}} entities are re-exported here as they are generated.
export {};
"#;

// ── resource: entities ────────────────────────────────────────────────────────

static TYPEORM_ENTITY: &str = r#"import {
  Column,
  CreateDateColumn,
  Entity,
  PrimaryGeneratedColumn,
  UpdateDateColumn,
} from 'typeorm';

@Entity('{{resourceName}}')
export class {{resourceNamePascal}} {
  @PrimaryGeneratedColumn('uuid')
  id: string;

{{#each fields}}
  @Column({ nullable: {{#if required}}false{{else}}true{{/if}}{{#if unique}}, unique: true{{/if}} })
  {{name}}: {{tsType}};

{{/each}}
  @CreateDateColumn()
  createdAt: Date;

  @UpdateDateColumn()
  updatedAt: Date;
}
"#;

static PRISMA_ENTITY: &str = r#"// Domain mirror of the {{resourceNamePascal}} Prisma model.
// Keep prisma/schema.prisma in sync when fields change.
export class {{resourceNamePascal}} {
  id: string;
{{#each fields}}
  {{name}}{{#unless required}}?{{/unless}}: {{tsType}};
{{/each}}
  createdAt: Date;
  updatedAt: Date;
}
"#;

static MONGOOSE_ENTITY: &str = r#"import { Prop, Schema, SchemaFactory } from '@nestjs/mongoose';
import { Document } from 'mongoose';

@Schema({ collection: '{{resourceName}}', timestamps: true })
export class {{resourceNamePascal}} extends Document {
{{#each fields}}
  @Prop({ required: {{required}}{{#if unique}}, unique: true{{/if}} })
  {{name}}: {{tsType}};

{{/each}}
}

export const {{resourceNamePascal}}Schema = SchemaFactory.createForClass({{resourceNamePascal}});
"#;

// ── resource: repositories ────────────────────────────────────────────────────

static REPOSITORY_INTERFACE: &str = r#"import { {{resourceNamePascal}} } from '../entities/{{resourceName}}.entity';

export abstract class {{resourceNamePascal}}Repository {
  abstract create(data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}>;
  abstract findById(id: string): Promise<{{resourceNamePascal}} | null>;
  abstract findAll(): Promise<{{resourceNamePascal}}[]>;
  abstract update(id: string, data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}>;
  abstract delete(id: string): Promise<void>;
}
"#;

static TYPEORM_REPOSITORY: &str = r#"import { Injectable, NotFoundException } from '@nestjs/common';
import { InjectRepository } from '@nestjs/typeorm';
import { Repository } from 'typeorm';
import { {{resourceNamePascal}} } from '../../domain/entities/{{resourceName}}.entity';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class TypeOrm{{resourceNamePascal}}Repository extends {{resourceNamePascal}}Repository {
  constructor(
    @InjectRepository({{resourceNamePascal}})
    private readonly repository: Repository<{{resourceNamePascal}}>,
  ) {
    super();
  }

  async create(data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}> {
    return this.repository.save(this.repository.create(data));
  }

  async findById(id: string): Promise<{{resourceNamePascal}} | null> {
    return this.repository.findOneBy({ id });
  }

  async findAll(): Promise<{{resourceNamePascal}}[]> {
    return this.repository.find();
  }

  async update(id: string, data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}> {
    await this.repository.update(id, data);
    const updated = await this.findById(id);
    if (!updated) {
      throw new NotFoundException(`{{resourceNamePascal}} ${id} not found`);
    }
    return updated;
  }

  async delete(id: string): Promise<void> {
    await this.repository.delete(id);
  }
}
"#;

static PRISMA_REPOSITORY: &str = r#"import { Injectable } from '@nestjs/common';
import { PrismaService } from '../prisma.service';
import { {{resourceNamePascal}} } from '../../domain/entities/{{resourceName}}.entity';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class Prisma{{resourceNamePascal}}Repository extends {{resourceNamePascal}}Repository {
  constructor(private readonly prisma: PrismaService) {
    super();
  }

  async create(data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}> {
    return this.prisma.{{resourceName}}.create({ data });
  }

  async findById(id: string): Promise<{{resourceNamePascal}} | null> {
    return this.prisma.{{resourceName}}.findUnique({ where: { id } });
  }

  async findAll(): Promise<{{resourceNamePascal}}[]> {
    return this.prisma.{{resourceName}}.findMany();
  }

  async update(id: string, data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}> {
    return this.prisma.{{resourceName}}.update({ where: { id }, data });
  }

  async delete(id: string): Promise<void> {
    await this.prisma.{{resourceName}}.delete({ where: { id } });
  }
}
"#;

static MONGOOSE_REPOSITORY: &str = r#"import { Injectable, NotFoundException } from '@nestjs/common';
import { InjectModel } from '@nestjs/mongoose';
import { Model } from 'mongoose';
import { {{resourceNamePascal}} } from '../../domain/entities/{{resourceName}}.entity';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class Mongoose{{resourceNamePascal}}Repository extends {{resourceNamePascal}}Repository {
  constructor(
    @InjectModel({{resourceNamePascal}}.name)
    private readonly model: Model<{{resourceNamePascal}}>,
  ) {
    super();
  }

  async create(data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}> {
    return this.model.create(data);
  }

  async findById(id: string): Promise<{{resourceNamePascal}} | null> {
    return this.model.findById(id).exec();
  }

  async findAll(): Promise<{{resourceNamePascal}}[]> {
    return this.model.find().exec();
  }

  async update(id: string, data: Partial<{{resourceNamePascal}}>): Promise<{{resourceNamePascal}}> {
    const updated = await this.model.findByIdAndUpdate(id, data, { new: true }).exec();
    if (!updated) {
      throw new NotFoundException(`{{resourceNamePascal}} ${id} not found`);
    }
    return updated;
  }

  async delete(id: string): Promise<void> {
    await this.model.findByIdAndDelete(id).exec();
  }
}
"#;

// ── resource: commands & queries ──────────────────────────────────────────────

static CREATE_COMMAND: &str = r#"export class Create{{resourceNamePascal}}Command {
  constructor(
{{#each fields}}
    public readonly {{name}}{{#unless required}}?{{/unless}}: {{tsType}},
{{/each}}
  ) {}
}
"#;

static UPDATE_COMMAND: &str = r#"export class Update{{resourceNamePascal}}Command {
  constructor(
    public readonly id: string,
{{#each fields}}
    public readonly {{name}}?: {{tsType}},
{{/each}}
  ) {}
}
"#;

static DELETE_COMMAND: &str = r#"export class Delete{{resourceNamePascal}}Command {
  constructor(public readonly id: string) {}
}
"#;

static GET_QUERY: &str = r#"export class Get{{resourceNamePascal}}Query {
  constructor(public readonly id: string) {}
}
"#;

static LIST_QUERY: &str = r#"export class List{{resourceNamePascal}}sQuery {}
"#;

// ── resource: use cases ───────────────────────────────────────────────────────

static CREATE_USE_CASE: &str = r#"import { Injectable } from '@nestjs/common';
import { Create{{resourceNamePascal}}Command } from '../commands/create-{{resourceName}}.command';
import { {{resourceNamePascal}} } from '../../domain/entities/{{resourceName}}.entity';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class Create{{resourceNamePascal}}UseCase {
  constructor(private readonly repository: {{resourceNamePascal}}Repository) {}

  async execute(command: Create{{resourceNamePascal}}Command): Promise<{{resourceNamePascal}}> {
    return this.repository.create({ ...command });
  }
}
"#;

static UPDATE_USE_CASE: &str = r#"import { Injectable } from '@nestjs/common';
import { Update{{resourceNamePascal}}Command } from '../commands/update-{{resourceName}}.command';
import { {{resourceNamePascal}} } from '../../domain/entities/{{resourceName}}.entity';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class Update{{resourceNamePascal}}UseCase {
  constructor(private readonly repository: {{resourceNamePascal}}Repository) {}

  async execute(command: Update{{resourceNamePascal}}Command): Promise<{{resourceNamePascal}}> {
    const { id, ...data } = command;
    return this.repository.update(id, data);
  }
}
"#;

static DELETE_USE_CASE: &str = r#"import { Injectable } from '@nestjs/common';
import { Delete{{resourceNamePascal}}Command } from '../commands/delete-{{resourceName}}.command';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class Delete{{resourceNamePascal}}UseCase {
  constructor(private readonly repository: {{resourceNamePascal}}Repository) {}

  async execute(command: Delete{{resourceNamePascal}}Command): Promise<void> {
    await this.repository.delete(command.id);
  }
}
"#;

static GET_USE_CASE: &str = r#"import { Injectable, NotFoundException } from '@nestjs/common';
import { Get{{resourceNamePascal}}Query } from '../queries/get-{{resourceName}}.query';
import { {{resourceNamePascal}} } from '../../domain/entities/{{resourceName}}.entity';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class Get{{resourceNamePascal}}UseCase {
  constructor(private readonly repository: {{resourceNamePascal}}Repository) {}

  async execute(query: Get{{resourceNamePascal}}Query): Promise<{{resourceNamePascal}}> {
    const found = await this.repository.findById(query.id);
    if (!found) {
      throw new NotFoundException(`{{resourceNamePascal}} ${query.id} not found`);
    }
    return found;
  }
}
"#;

static LIST_USE_CASE: &str = r#"import { Injectable } from '@nestjs/common';
import { {{resourceNamePascal}} } from '../../domain/entities/{{resourceName}}.entity';
import { {{resourceNamePascal}}Repository } from '../../domain/repositories/{{resourceName}}.repository';

@Injectable()
export class List{{resourceNamePascal}}sUseCase {
  constructor(private readonly repository: {{resourceNamePascal}}Repository) {}

  async execute(): Promise<{{resourceNamePascal}}[]> {
    return this.repository.findAll();
  }
}
"#;

// ── resource: DTO & controller ────────────────────────────────────────────────

static DTO: &str = r#"export class {{resourceNamePascal}}Dto {
  id: string;
{{#each fields}}
  {{name}}{{#unless required}}?{{/unless}}: {{tsType}};
{{/each}}
  createdAt: Date;
  updatedAt: Date;
}
"#;

static CONTROLLER: &str = r#"import { Body, Controller, Delete, Get, Param, Post, Put } from '@nestjs/common';
import { Create{{resourceNamePascal}}Command } from '../../application/commands/create-{{resourceName}}.command';
import { Update{{resourceNamePascal}}Command } from '../../application/commands/update-{{resourceName}}.command';
import { Delete{{resourceNamePascal}}Command } from '../../application/commands/delete-{{resourceName}}.command';
import { Get{{resourceNamePascal}}Query } from '../../application/queries/get-{{resourceName}}.query';
import { Create{{resourceNamePascal}}UseCase } from '../../application/use-cases/create-{{resourceName}}.use-case';
import { Update{{resourceNamePascal}}UseCase } from '../../application/use-cases/update-{{resourceName}}.use-case';
import { Delete{{resourceNamePascal}}UseCase } from '../../application/use-cases/delete-{{resourceName}}.use-case';
import { Get{{resourceNamePascal}}UseCase } from '../../application/use-cases/get-{{resourceName}}.use-case';
import { List{{resourceNamePascal}}sUseCase } from '../../application/use-cases/list-{{resourceName}}s.use-case';

@Controller('{{resourceName}}s')
export class {{resourceNamePascal}}Controller {
  constructor(
    private readonly createUseCase: Create{{resourceNamePascal}}UseCase,
    private readonly updateUseCase: Update{{resourceNamePascal}}UseCase,
    private readonly deleteUseCase: Delete{{resourceNamePascal}}UseCase,
    private readonly getUseCase: Get{{resourceNamePascal}}UseCase,
    private readonly listUseCase: List{{resourceNamePascal}}sUseCase,
  ) {}

  @Post()
  create(@Body() command: Create{{resourceNamePascal}}Command) {
    return this.createUseCase.execute(command);
  }

  @Get()
  list() {
    return this.listUseCase.execute();
  }

  @Get(':id')
  get(@Param('id') id: string) {
    return this.getUseCase.execute(new Get{{resourceNamePascal}}Query(id));
  }

  @Put(':id')
  update(@Param('id') id: string, @Body() data: Partial<Update{{resourceNamePascal}}Command>) {
    return this.updateUseCase.execute(new Update{{resourceNamePascal}}Command(id, ...Object.values(data)));
  }

  @Delete(':id')
  delete(@Param('id') id: string) {
    return this.deleteUseCase.execute(new Delete{{resourceNamePascal}}Command(id));
  }
}
"#;
